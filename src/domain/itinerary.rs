// ==========================================
// 货运跟踪系统 - 航程计划
// ==========================================
// 依据: 货运跟踪系统_运输状态派生方案_v1.0.md - 第 3/4 节
// 职责: 定义航程段与航程计划, 以及事件-航程段匹配谓词
// 红线: 航程计划构造后不可变, 且至少包含一个航程段
// ==========================================

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::location::Location;
use crate::domain::types::HandlingEventType;
use crate::handling::HandlingEvent;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 航程段 (Leg)
// ==========================================

/// 航程段 (Leg)
///
/// 一个运输区段: 由某一航次在装货地点装货, 在卸货地点卸货。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leg {
    /// 航次编号
    pub voyage_number: String,

    /// 装货地点
    pub load_location: Location,

    /// 装货日期
    pub load_date: NaiveDate,

    /// 卸货地点
    pub unload_location: Location,

    /// 卸货日期
    pub unload_date: NaiveDate,
}

impl Leg {
    /// 创建新的航程段
    pub fn new(
        voyage_number: String,
        load_location: Location,
        load_date: NaiveDate,
        unload_location: Location,
        unload_date: NaiveDate,
    ) -> Self {
        Self {
            voyage_number,
            load_location,
            load_date,
            unload_location,
            unload_date,
        }
    }
}

impl fmt::Display for Leg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} ({}) -> {} ({})",
            self.voyage_number,
            self.load_location.code,
            self.load_date,
            self.unload_location.code,
            self.unload_date
        )
    }
}

// ==========================================
// 航程计划 (Itinerary)
// ==========================================

/// 航程计划 (Itinerary)
///
/// 有序且非空的航程段序列, 描述货物的计划运输路径。
/// "货物尚未排定航程"用 Option<Itinerary> 表达, 不用空计划表达。
// 序列化为航程段数组; 反序列化走 TryFrom, 保证非空不变式
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<Leg>", try_from = "Vec<Leg>")]
pub struct Itinerary {
    legs: Vec<Leg>,
}

impl Itinerary {
    /// 创建新的航程计划 (校验非空)
    pub fn new(legs: Vec<Leg>) -> DomainResult<Self> {
        if legs.is_empty() {
            return Err(DomainError::EmptyItinerary);
        }
        Ok(Self { legs })
    }

    /// 获取航程段序列
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// 获取首段 (构造时保证非空)
    pub fn first_leg(&self) -> &Leg {
        &self.legs[0]
    }

    /// 获取末段 (构造时保证非空)
    pub fn last_leg(&self) -> &Leg {
        &self.legs[self.legs.len() - 1]
    }

    /// 获取计划到达日期 (末段卸货日期)
    pub fn final_arrival_date(&self) -> NaiveDate {
        self.last_leg().unload_date
    }

    /// 判断搬运事件是否符合航程计划预期
    ///
    /// 匹配规则:
    /// - RECEIVE: 事件地点 == 首段装货地点
    /// - LOAD:    事件地点 == 任一航程段的装货地点
    /// - UNLOAD:  事件地点 == 任一航程段的卸货地点
    /// - CLAIM / CUSTOMS: 事件地点 == 末段卸货地点
    pub fn is_expected(&self, event: &HandlingEvent) -> bool {
        match event.event_type {
            HandlingEventType::Receive => self.first_leg().load_location == event.location,
            HandlingEventType::Load => self
                .legs
                .iter()
                .any(|leg| leg.load_location == event.location),
            HandlingEventType::Unload => self
                .legs
                .iter()
                .any(|leg| leg.unload_location == event.location),
            HandlingEventType::Claim | HandlingEventType::Customs => {
                self.last_leg().unload_location == event.location
            }
        }
    }
}

impl From<Itinerary> for Vec<Leg> {
    fn from(itinerary: Itinerary) -> Self {
        itinerary.legs
    }
}

impl TryFrom<Vec<Leg>> for Itinerary {
    type Error = DomainError;

    fn try_from(legs: Vec<Leg>) -> DomainResult<Self> {
        Itinerary::new(legs)
    }
}

impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({} 段)",
            self.first_leg().load_location.code,
            self.last_leg().unload_location.code,
            self.legs.len()
        )
    }
}
