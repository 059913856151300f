// ==========================================
// 货运跟踪系统 - 领域类型定义
// ==========================================
// 依据: 货运跟踪系统_运输状态派生方案_v1.0.md - 第 3 节
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 搬运事件类型 (Handling Event Type)
// ==========================================
// 序列化格式: SCREAMING_SNAKE_CASE (与外部事件源一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HandlingEventType {
    Receive, // 收货 (航程起点)
    Load,    // 装货
    Unload,  // 卸货
    Customs, // 清关
    Claim,   // 提货 (航程终点)
}

impl fmt::Display for HandlingEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandlingEventType::Receive => write!(f, "RECEIVE"),
            HandlingEventType::Load => write!(f, "LOAD"),
            HandlingEventType::Unload => write!(f, "UNLOAD"),
            HandlingEventType::Customs => write!(f, "CUSTOMS"),
            HandlingEventType::Claim => write!(f, "CLAIM"),
        }
    }
}

// ==========================================
// 路由状态 (Routing Status)
// ==========================================
// 货物无航程计划时不存在路由状态 (用 Option 表达, 不设 NOT_ROUTED 变体)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoutingStatus {
    Routed,    // 航程计划与路线规格一致
    Misrouted, // 航程计划首尾与路线规格不符
}

impl fmt::Display for RoutingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoutingStatus::Routed => write!(f, "ROUTED"),
            RoutingStatus::Misrouted => write!(f, "MISROUTED"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handling_event_type_display() {
        assert_eq!(HandlingEventType::Receive.to_string(), "RECEIVE");
        assert_eq!(HandlingEventType::Load.to_string(), "LOAD");
        assert_eq!(HandlingEventType::Unload.to_string(), "UNLOAD");
        assert_eq!(HandlingEventType::Customs.to_string(), "CUSTOMS");
        assert_eq!(HandlingEventType::Claim.to_string(), "CLAIM");
    }

    #[test]
    fn test_routing_status_serialization() {
        let json = serde_json::to_string(&RoutingStatus::Routed).unwrap();
        assert_eq!(json, "\"ROUTED\"");

        let status: RoutingStatus = serde_json::from_str("\"MISROUTED\"").unwrap();
        assert_eq!(status, RoutingStatus::Misrouted);
    }

    #[test]
    fn test_handling_event_type_serialization() {
        let json = serde_json::to_string(&HandlingEventType::Unload).unwrap();
        assert_eq!(json, "\"UNLOAD\"");

        let event_type: HandlingEventType = serde_json::from_str("\"CUSTOMS\"").unwrap();
        assert_eq!(event_type, HandlingEventType::Customs);
    }
}
