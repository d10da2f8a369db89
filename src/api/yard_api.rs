// ==========================================
// 车辆段运营状态服务 - 股道计划 API
// ==========================================
// 职责: 生成股道计划、人工覆写、查询当前计划
// 红线: 生成与覆写共用同一存储位，均为整份替换
// 说明: 覆写不按分配规则校验（同一列车可出现在多个分组、股道可指向未知列车）
// ==========================================

use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::domain::yard::{YardInput, YardPlan};
use crate::engine::yard_allocator::YardAllocator;
use crate::repository::yard_plan_repo::YardPlanRepository;

// ==========================================
// YardApi - 股道计划 API
// ==========================================
pub struct YardApi {
    allocator: YardAllocator,
    yard_plan_repo: Arc<YardPlanRepository>,
}

impl YardApi {
    pub fn new(allocator: YardAllocator, yard_plan_repo: Arc<YardPlanRepository>) -> Self {
        Self {
            allocator,
            yard_plan_repo,
        }
    }

    /// 按股道数与列车序列生成计划，并替换当前计划
    pub fn generate_plan(&self, input: YardInput) -> ApiResult<YardPlan> {
        let plan = self.allocator.plan(input.tracks, &input.trainsets);
        let stored = self.yard_plan_repo.save_current(plan)?;

        tracing::info!(
            tracks = input.tracks,
            trainsets = input.trainsets.len(),
            assigned_tracks = stored.suggested_map.len(),
            "股道计划已生成并替换当前计划"
        );
        Ok(stored)
    }

    /// 值班员覆写当前计划（原样保存）
    pub fn override_plan(&self, plan: YardPlan) -> ApiResult<YardPlan> {
        let stored = self.yard_plan_repo.save_current(plan)?;
        tracing::info!(
            assigned_tracks = stored.suggested_map.len(),
            trainsets = stored.assigned_count(),
            "股道计划已被人工覆写"
        );
        Ok(stored)
    }

    /// 当前计划（尚无计划时返回空计划）
    pub fn current_plan(&self) -> ApiResult<YardPlan> {
        Ok(self.yard_plan_repo.current()?.unwrap_or_default())
    }
}
