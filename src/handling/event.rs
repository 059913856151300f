// ==========================================
// 货运跟踪系统 - 搬运事件
// ==========================================
// 依据: 货运跟踪系统_运输状态派生方案_v1.0.md - 第 3 节
// 职责: 定义搬运事件记录 (外部子系统产出, 本核心只读)
// ==========================================

use crate::domain::location::Location;
use crate::domain::types::HandlingEventType;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 搬运事件 (HandlingEvent)
///
/// 货物在某地点发生的一次真实搬运记录。
/// "尚未记录任何事件"用 Option<HandlingEvent> 表达。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlingEvent {
    /// 事件类型
    pub event_type: HandlingEventType,

    /// 事件发生地点
    pub location: Location,

    /// 登记日期
    pub registration_date: NaiveDate,

    /// 完成日期
    pub completion_date: NaiveDate,

    /// 关联货物标识 (可选)
    pub cargo_ref: Option<String>,
}

impl HandlingEvent {
    /// 创建新的搬运事件
    pub fn new(
        event_type: HandlingEventType,
        location: Location,
        registration_date: NaiveDate,
        completion_date: NaiveDate,
        cargo_ref: Option<String>,
    ) -> Self {
        Self {
            event_type,
            location,
            registration_date,
            completion_date,
            cargo_ref,
        }
    }
}

impl fmt::Display for HandlingEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}@{} ({})",
            self.event_type, self.location.code, self.completion_date
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::location::UnLocode;

    #[test]
    fn test_event_creation_and_display() {
        let event = HandlingEvent::new(
            HandlingEventType::Unload,
            Location::new(
                UnLocode::new("DAL".to_string()).unwrap(),
                "Dallas".to_string(),
            ),
            NaiveDate::from_ymd_opt(2013, 6, 21).unwrap(),
            NaiveDate::from_ymd_opt(2013, 6, 21).unwrap(),
            None,
        );

        assert_eq!(event.event_type, HandlingEventType::Unload);
        assert_eq!(event.cargo_ref, None);
        assert_eq!(event.to_string(), "UNLOAD@DAL (2013-06-21)");
    }
}
