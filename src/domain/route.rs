// ==========================================
// 货运跟踪系统 - 路线规格
// ==========================================
// 依据: 货运跟踪系统_运输状态派生方案_v1.0.md - 第 3 节
// 职责: 定义订舱时确定的路线规格 (起点/终点/到达期限)
// 红线: 订舱后不可变
// ==========================================

use crate::domain::itinerary::Itinerary;
use crate::domain::location::Location;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 路线规格 (RouteSpecification)
///
/// 订舱时确定的运输要求: 从哪里到哪里, 最晚何时到达。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSpecification {
    /// 起点
    pub origin: Location,

    /// 终点
    pub destination: Location,

    /// 到达期限
    pub arrival_deadline: NaiveDate,
}

impl RouteSpecification {
    /// 创建新的路线规格
    pub fn new(origin: Location, destination: Location, arrival_deadline: NaiveDate) -> Self {
        Self {
            origin,
            destination,
            arrival_deadline,
        }
    }

    /// 判断航程计划是否满足路线规格
    ///
    /// 规则: 首段装货地点 == 起点, 且末段卸货地点 == 终点。
    /// 到达期限不参与路由状态判定。
    pub fn is_satisfied_by(&self, itinerary: &Itinerary) -> bool {
        itinerary.first_leg().load_location == self.origin
            && itinerary.last_leg().unload_location == self.destination
    }
}

impl fmt::Display for RouteSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} (期限: {})",
            self.origin.code, self.destination.code, self.arrival_deadline
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::itinerary::Leg;
    use crate::domain::location::UnLocode;

    fn location(code: &str, name: &str) -> Location {
        Location::new(UnLocode::new(code.to_string()).unwrap(), name.to_string())
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_satisfied_by_matching_itinerary() {
        let origin = location("HKG", "Hong Kong");
        let destination = location("DAL", "Dallas");
        let spec = RouteSpecification::new(origin.clone(), destination.clone(), date(2013, 7, 1));

        let itinerary = Itinerary::new(vec![Leg::new(
            "Voyage ABC".to_string(),
            origin,
            date(2013, 6, 14),
            destination,
            date(2013, 6, 19),
        )])
        .unwrap();

        assert!(spec.is_satisfied_by(&itinerary));
    }

    #[test]
    fn test_not_satisfied_by_wrong_endpoints() {
        let origin = location("HKG", "Hong Kong");
        let destination = location("DAL", "Dallas");
        let elsewhere = location("LGB", "Long Beach");
        let spec = RouteSpecification::new(origin.clone(), destination, date(2013, 7, 1));

        // 末段卸货地点不是终点
        let itinerary = Itinerary::new(vec![Leg::new(
            "Voyage ABC".to_string(),
            origin,
            date(2013, 6, 14),
            elsewhere,
            date(2013, 6, 19),
        )])
        .unwrap();

        assert!(!spec.is_satisfied_by(&itinerary));
    }

    #[test]
    fn test_display() {
        let spec = RouteSpecification::new(
            location("HKG", "Hong Kong"),
            location("DAL", "Dallas"),
            date(2013, 7, 1),
        );
        assert_eq!(spec.to_string(), "HKG -> DAL (期限: 2013-07-01)");
    }
}
