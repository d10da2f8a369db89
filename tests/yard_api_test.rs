// ==========================================
// YardApi 集成测试
// ==========================================
// 测试范围:
// 1. 生成计划: 分组轮转、股道分配、替换当前计划
// 2. 人工覆写: 原样保存、不校验
// 3. 当前计划: 初始为空
// ==========================================

mod helpers;

use depot_ops::domain::{YardInput, YardPlan};
use helpers::api_test_helper::ApiTestEnv;
use indexmap::IndexMap;

fn ids(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_current_plan_初始为空() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");

    let plan = env.state.yard_api.current_plan().expect("查询失败");
    assert!(plan.is_empty());
    assert_eq!(plan, YardPlan::default());
}

#[test]
fn test_generate_plan_四列车两股道() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");

    let plan = env
        .state
        .yard_api
        .generate_plan(YardInput {
            tracks: 2,
            trainsets: ids(&["A", "B", "C", "D"]),
        })
        .expect("生成失败");

    assert_eq!(plan.service, ids(&["A", "D"]));
    assert_eq!(plan.standby, ids(&["B"]));
    assert_eq!(plan.maintenance, ids(&["C"]));

    let expected: IndexMap<String, String> = [("track_1", "A"), ("track_2", "B")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    assert_eq!(plan.suggested_map, expected);

    // 生成结果即为当前计划
    assert_eq!(env.state.yard_api.current_plan().unwrap(), plan);
}

#[test]
fn test_generate_plan_零股道() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");

    let plan = env
        .state
        .yard_api
        .generate_plan(YardInput {
            tracks: 0,
            trainsets: ids(&["A"]),
        })
        .expect("生成失败");

    assert!(plan.suggested_map.is_empty());
    assert_eq!(plan.service, ids(&["A"]));
}

#[test]
fn test_override_plan_原样保存不校验() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");

    env.state
        .yard_api
        .generate_plan(YardInput {
            tracks: 3,
            trainsets: ids(&["T01", "T02", "T03"]),
        })
        .expect("生成失败");

    // 同一列车出现在两个分组，股道指向未知列车，标签不连续
    let mut suggested_map = IndexMap::new();
    suggested_map.insert("track_9".to_string(), "GHOST".to_string());
    suggested_map.insert("track_1".to_string(), "T02".to_string());
    let manual = YardPlan {
        suggested_map,
        service: ids(&["T02"]),
        standby: ids(&["T02", "T01"]),
        maintenance: vec![],
    };

    let stored = env
        .state
        .yard_api
        .override_plan(manual.clone())
        .expect("覆写失败");
    assert_eq!(stored, manual);

    let current = env.state.yard_api.current_plan().unwrap();
    assert_eq!(current, manual);
    let labels: Vec<&str> = current.suggested_map.keys().map(String::as_str).collect();
    assert_eq!(labels, vec!["track_9", "track_1"]);
}

#[test]
fn test_generate_after_override_整份替换() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");

    env.state
        .yard_api
        .override_plan(YardPlan {
            suggested_map: IndexMap::new(),
            service: ids(&["X"]),
            standby: ids(&["Y"]),
            maintenance: ids(&["Z"]),
        })
        .expect("覆写失败");

    let generated = env
        .state
        .yard_api
        .generate_plan(YardInput {
            tracks: -1,
            trainsets: ids(&["A", "B"]),
        })
        .expect("生成失败");

    let current = env.state.yard_api.current_plan().unwrap();
    assert_eq!(current, generated);
    assert_eq!(current.service, ids(&["A"]));
    assert_eq!(current.standby, ids(&["B"]));
    assert!(current.maintenance.is_empty());
    assert!(current.suggested_map.is_empty());
}
