// ==========================================
// 货运跟踪系统 - 运输状态派生引擎
// ==========================================
// 依据: 货运跟踪系统_运输状态派生方案_v1.0.md - 第 4 节
// 职责: 从 (路线规格, 航程计划?, 最近搬运事件?) 派生运输状态
// 红线: 只读投影, 每次查询重新计算, 不持久化派生结果
// ==========================================

use crate::domain::itinerary::Itinerary;
use crate::domain::location::Location;
use crate::domain::route::RouteSpecification;
use crate::domain::types::{HandlingEventType, RoutingStatus};
use crate::handling::HandlingEvent;
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 运输状态 (Delivery)
// ==========================================

/// 运输状态 (Delivery)
///
/// 三个输入的只读派生视图, 借用输入且不持有。
/// 输入变化时整体重新派生, 同一输入上的每次查询结果恒定。
#[derive(Debug, Clone, Copy)]
pub struct Delivery<'a> {
    route_spec: &'a RouteSpecification,
    itinerary: Option<&'a Itinerary>,
    last_event: Option<&'a HandlingEvent>,
}

impl<'a> Delivery<'a> {
    /// 从三个输入派生运输状态
    ///
    /// # 参数
    /// - route_spec: 路线规格 (必有)
    /// - itinerary: 航程计划, None 表示尚未排定航程
    /// - last_event: 最近一次搬运事件, None 表示尚无事件记录
    pub fn derived_from(
        route_spec: &'a RouteSpecification,
        itinerary: Option<&'a Itinerary>,
        last_event: Option<&'a HandlingEvent>,
    ) -> Self {
        Self {
            route_spec,
            itinerary,
            last_event,
        }
    }

    /// 最后已知地点
    ///
    /// 只取决于最近事件; 无事件记录时地点未知 (None)。
    pub fn last_known_location(&self) -> Option<&'a Location> {
        self.last_event.map(|event| &event.location)
    }

    /// 是否已在目的地卸货
    ///
    /// 当且仅当: 存在事件, 类型为 UNLOAD, 且事件地点 == 路线终点。
    pub fn is_unloaded_at_destination(&self) -> bool {
        self.last_event.map_or(false, |event| {
            event.event_type == HandlingEventType::Unload
                && event.location == self.route_spec.destination
        })
    }

    /// 是否偏离航程
    ///
    /// 当且仅当: 存在事件且存在航程计划, 而事件不符合计划中任何
    /// 航程段的预期搬运。无事件或无计划时均为 false
    /// (没有计划本身不构成偏离)。
    pub fn is_misdirected(&self) -> bool {
        match (self.itinerary, self.last_event) {
            (Some(itinerary), Some(event)) => !itinerary.is_expected(event),
            _ => false,
        }
    }

    /// 路由状态
    ///
    /// 无航程计划时不存在路由状态 (None, 不是错误);
    /// 有计划时按首尾地点是否满足路线规格判定 ROUTED / MISROUTED。
    pub fn routing_status(&self) -> Option<RoutingStatus> {
        self.itinerary.map(|itinerary| {
            if self.route_spec.is_satisfied_by(itinerary) {
                RoutingStatus::Routed
            } else {
                RoutingStatus::Misrouted
            }
        })
    }

    /// 是否按计划运行
    ///
    /// 当且仅当: 已有事件记录, 路由状态为 ROUTED, 且未偏离航程。
    /// 尚无事件时不能断言货物在正轨上, 返回 false。
    pub fn is_on_track(&self) -> bool {
        self.last_event.is_some()
            && self.routing_status() == Some(RoutingStatus::Routed)
            && !self.is_misdirected()
    }

    /// 生成可序列化的派生结果快照
    pub fn to_view(&self) -> DeliveryView {
        let view = DeliveryView {
            last_known_location: self
                .last_known_location()
                .map(|loc| loc.code.as_str().to_string()),
            unloaded_at_destination: self.is_unloaded_at_destination(),
            misdirected: self.is_misdirected(),
            routing_status: self.routing_status(),
            on_track: self.is_on_track(),
        };
        tracing::debug!("运输状态派生完成: {} [{}]", self.route_spec, view);
        view
    }
}

// ==========================================
// 派生结果快照 (DeliveryView)
// ==========================================

/// 派生结果快照 (DeliveryView)
///
/// Delivery 查询结果的标准化只读快照, 可序列化, 不借用输入。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryView {
    /// 最后已知地点代码 (无事件记录时为 None)
    pub last_known_location: Option<String>,

    /// 是否已在目的地卸货
    pub unloaded_at_destination: bool,

    /// 是否偏离航程
    pub misdirected: bool,

    /// 路由状态 (无航程计划时为 None)
    pub routing_status: Option<RoutingStatus>,

    /// 是否按计划运行
    pub on_track: bool,
}

impl fmt::Display for DeliveryView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "location: {}, routing: {}, misdirected: {}, unloaded_at_destination: {}, on_track: {}",
            self.last_known_location.as_deref().unwrap_or("UNKNOWN"),
            self.routing_status
                .map(|s| s.to_string())
                .unwrap_or_else(|| "NOT_ROUTED".to_string()),
            self.misdirected,
            self.unloaded_at_destination,
            self.on_track
        )
    }
}
