//! 해외 시장별 주문 가능 시간 (한국 시간 기준).
//!
//! 장외 시간 주문은 브로커가 거절한다. 여기서는 시간대만 알려줄 뿐 주문을 막지는 않으며,
//! 휴장일과 주말은 고려하지 않는다.
//!
//! | 시장 | 시간 (KST) |
//! |---|---|
//! | 미국 | 23:30 ~ 06:00 (서머타임 22:30 ~ 05:00) |
//! | 일본 | 09:00 ~ 11:30, 12:30 ~ 15:00 |
//! | 중국 | 10:30 ~ 16:00 |
//! | 홍콩 | 10:30 ~ 13:00, 14:00 ~ 17:00 |

use crate::types::time::Time;
use crate::types::Market;
use chrono::{DateTime, Timelike, Utc};
use chrono_tz::OffsetComponents;

/// 자정 기준 분 단위 [start, end). end < start이면 자정을 넘는 구간
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    start: u32,
    end: u32,
}

impl Window {
    const fn new(start_hour: u32, start_minute: u32, end_hour: u32, end_minute: u32) -> Self {
        Self {
            start: start_hour * 60 + start_minute,
            end: end_hour * 60 + end_minute,
        }
    }

    pub fn contains(&self, minute_of_day: u32) -> bool {
        if self.start <= self.end {
            self.start <= minute_of_day && minute_of_day < self.end
        } else {
            minute_of_day >= self.start || minute_of_day < self.end
        }
    }

    /// (시, 분) 쌍으로 반환
    pub fn bounds(&self) -> ((u32, u32), (u32, u32)) {
        (
            (self.start / 60, self.start % 60),
            (self.end / 60, self.end % 60),
        )
    }
}

const US_STANDARD: [Window; 1] = [Window::new(23, 30, 6, 0)];
const US_DAYLIGHT: [Window; 1] = [Window::new(22, 30, 5, 0)];
const JAPAN: [Window; 2] = [Window::new(9, 0, 11, 30), Window::new(12, 30, 15, 0)];
const CHINA: [Window; 1] = [Window::new(10, 30, 16, 0)];
const HONG_KONG: [Window; 2] = [Window::new(10, 30, 13, 0), Window::new(14, 0, 17, 0)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TradingSession {
    market: Market,
}

impl TradingSession {
    /// 베트남은 알려진 시간대가 없어서 None
    pub fn for_market(market: Market) -> Option<Self> {
        match market {
            Market::Vietnam => None,
            _ => Some(Self { market }),
        }
    }

    pub fn market(&self) -> Market {
        self.market
    }

    /// 미국은 뉴욕의 서머타임 적용 여부에 따라 구간이 달라짐
    pub fn windows_at(&self, instant: DateTime<Utc>) -> &'static [Window] {
        match self.market {
            Market::Us if new_york_observes_dst(instant) => &US_DAYLIGHT,
            Market::Us => &US_STANDARD,
            Market::Japan => &JAPAN,
            Market::Shanghai | Market::Shenzhen => &CHINA,
            Market::HongKong => &HONG_KONG,
            Market::Vietnam => &[],
        }
    }

    pub fn is_open_at(&self, instant: DateTime<Utc>) -> bool {
        let kst = Time::from_utc(instant).time();
        let minute_of_day = kst.hour() * 60 + kst.minute();
        self.windows_at(instant)
            .iter()
            .any(|window| window.contains(minute_of_day))
    }

    pub fn is_open_now(&self) -> bool {
        self.is_open_at(Time::now().inner().with_timezone(&Utc))
    }
}

fn new_york_observes_dst(instant: DateTime<Utc>) -> bool {
    let local = instant.with_timezone(&chrono_tz::America::New_York);
    local.offset().dst_offset() != chrono::Duration::zero()
}
