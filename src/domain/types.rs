// ==========================================
// 车辆段运营状态服务 - 领域类型定义
// ==========================================
// 红线: 值班分组互斥，每列车在一份生成计划中只属于一组
// ==========================================

// ==========================================
// 值班分组 (Duty Group)
// ==========================================
// 与 YardPlan 的 service/standby/maintenance 字段一一对应
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DutyGroup {
    Service,     // 正线运营
    Standby,     // 热备
    Maintenance, // 检修
}

impl DutyGroup {
    /// 按输入位置轮转取分组: i mod 3
    pub fn for_position(index: usize) -> Self {
        match index % 3 {
            0 => DutyGroup::Service,
            1 => DutyGroup::Standby,
            _ => DutyGroup::Maintenance,
        }
    }
}

// ==========================================
// 资源类型 (Resource Kind)
// ==========================================
// 对应 record_kv 表的 resource 列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    RollingStock,
    Signalling,
    Telecom,
    Cleaning,
    YardPlan,
}

impl ResourceKind {
    /// 存储层使用的资源名
    pub fn to_db_str(&self) -> &'static str {
        match self {
            ResourceKind::RollingStock => "rolling_stock",
            ResourceKind::Signalling => "signalling",
            ResourceKind::Telecom => "telecom",
            ResourceKind::Cleaning => "cleaning",
            ResourceKind::YardPlan => "yard_plan",
        }
    }
}
