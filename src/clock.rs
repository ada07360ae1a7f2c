// ==========================================
// 时间源抽象
// ==========================================
// 职责: 折扣时段判断与快照命名的时间来源
// 红线: 业务逻辑不得直接读取墙上时钟（可测试性）
// ==========================================

use chrono::{Local, NaiveTime, Utc};

/// 时间源接口
///
/// Perishable 商品的折扣时段（17:30-18:30）依赖本地时间，
/// 快照文件名依赖毫秒时间戳；两者都通过本接口注入。
pub trait Clock: Send + Sync {
    /// 当前本地时间（时分秒）
    fn now_time(&self) -> NaiveTime;

    /// 当前 Unix 毫秒时间戳（快照文件命名）
    fn timestamp_millis(&self) -> i64;
}

// ==========================================
// SystemClock - 系统时钟
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_time(&self) -> NaiveTime {
        Local::now().time()
    }

    fn timestamp_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

// ==========================================
// FixedClock - 固定时钟（测试用）
// ==========================================
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    time: NaiveTime,
    millis: i64,
}

impl FixedClock {
    /// 固定在指定本地时间
    pub fn at(time: NaiveTime) -> Self {
        Self { time, millis: 0 }
    }

    /// 固定在指定本地时间与时间戳
    pub fn at_millis(time: NaiveTime, millis: i64) -> Self {
        Self { time, millis }
    }
}

impl Clock for FixedClock {
    fn now_time(&self) -> NaiveTime {
        self.time
    }

    fn timestamp_millis(&self) -> i64 {
        self.millis
    }
}
