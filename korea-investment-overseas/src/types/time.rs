use crate::Error;
use chrono::{DateTime, LocalResult, NaiveTime, Utc};

/// 한국 표준시(Asia/Seoul) 기준 시각
#[derive(Debug, Clone)]
pub struct Time(DateTime<chrono_tz::Tz>);

impl Time {
    pub fn now() -> Self {
        Self::from_utc(Utc::now())
    }
    pub fn from_utc(instant: DateTime<Utc>) -> Self {
        Self(instant.with_timezone(&chrono_tz::Asia::Seoul))
    }
    pub fn parse(s: &str, fmt: &str) -> Result<Self, Error> {
        let naive_dt = chrono::NaiveDateTime::parse_from_str(s, fmt)?;
        match naive_dt.and_local_timezone(chrono_tz::Asia::Seoul) {
            LocalResult::Single(t) => Ok(Time(t)),
            LocalResult::None | LocalResult::Ambiguous(_, _) => {
                Err(Error::invalid_value("time", s))
            }
        }
    }
    pub fn inner(&self) -> DateTime<chrono_tz::Tz> {
        self.0
    }
    pub fn time(&self) -> NaiveTime {
        self.0.time()
    }
}

/// ORD_TMD(HHMMSS). 거래소 현지 시각이며 날짜 정보는 없음
pub fn parse_order_time(s: &str) -> Result<NaiveTime, Error> {
    if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::invalid_value("ORD_TMD", s));
    }
    Ok(NaiveTime::parse_from_str(s, "%H%M%S")?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Offset, TimeZone, Timelike};

    #[test]
    fn test_parse_order_time() {
        let t = parse_order_time("235959").unwrap();
        assert_eq!((t.hour(), t.minute(), t.second()), (23, 59, 59));
        assert!(parse_order_time("9301").is_err());
        assert!(parse_order_time("250000").is_err());
        assert!(parse_order_time("09:30:").is_err());
    }

    #[test]
    fn test_time_is_seoul() {
        let utc = Utc.with_ymd_and_hms(2024, 3, 4, 15, 0, 0).unwrap();
        let t = Time::from_utc(utc);
        assert_eq!(t.time(), NaiveTime::from_hms_opt(0, 0, 0).unwrap());

        let parsed = Time::parse("2024-03-05 00:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
        assert_eq!(parsed.inner().with_timezone(&Utc), utc);
    }

    #[test]
    fn test_now_is_seoul() {
        let before = Utc::now();
        let now = Time::now().inner();
        assert_eq!(now.timezone(), chrono_tz::Asia::Seoul);
        assert_eq!(now.offset().fix().local_minus_utc(), 9 * 3600);
        assert!(now.with_timezone(&Utc) >= before);
    }
}
