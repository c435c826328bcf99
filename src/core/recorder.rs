//! # Run Recorder Module / 运行记录器模块
//!
//! This module implements the lifecycle-event aggregator: a strict state
//! machine that consumes run/feature/scenario/step events from an external
//! test runner, in runner order, and incrementally builds the result tree.
//!
//! 此模块实现生命周期事件聚合器：一个严格的状态机，
//! 按运行器顺序消费来自外部测试运行器的运行/功能/场景/步骤事件，
//! 并增量构建结果树。
//!
//! The event stream is trusted: the runner guarantees well-formed nesting,
//! so the recorder only checks the preconditions of each operation and
//! treats any violation as a contract breach by the event source.

use crate::core::models::{
    FeatureResult, ScenarioExecutionStatus, ScenarioResult, StepResult, TestExecution,
};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// A lifecycle event arrived outside the nesting order guaranteed by the
/// runner contract. Always fatal: the result tree would be structurally
/// invalid if the event were absorbed.
///
/// 生命周期事件到达时违反了运行器契约保证的嵌套顺序。
/// 始终是致命的：如果吸收该事件，结果树在结构上将是无效的。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecorderError {
    #[error("lifecycle event received while no test run is in progress")]
    NoRunInProgress,
    #[error("scenario event received while no feature is in progress")]
    NoFeatureInProgress,
    #[error("step event received while no scenario is in progress")]
    NoScenarioInProgress,
    #[error("step '{0}' ended without a recorded start")]
    UnknownStep(String),
}

/// The kind of a step, mirroring the Given/When/Then vocabulary of the
/// feature language. Rendered into the wire format as its display name.
///
/// 步骤的种类，对应功能语言的 Given/When/Then 词汇。
/// 以其显示名称渲染进线上格式。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Given,
    When,
    Then,
}

impl StepKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Given => "Given",
            Self::When => "When",
            Self::Then => "Then",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The step status vocabulary of the external test runner. Kept separate
/// from [`ScenarioExecutionStatus`] so the runner's vocabulary never leaks
/// into the persisted model without passing the boundary translation.
///
/// 外部测试运行器的步骤状态词汇。与 [`ScenarioExecutionStatus`] 分开保存，
/// 使运行器的词汇在未经过边界转换前不会泄漏进持久化模型。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerStepStatus {
    Ok,
    StepDefinitionPending,
    UndefinedStep,
    BindingError,
    TestError,
    Skipped,
}

/// Translates a runner status into the persisted status vocabulary.
/// The match is exhaustive over the runner's closed set; extending the
/// runner vocabulary forces this function to be revisited at compile time.
///
/// 将运行器状态转换为持久化状态词汇。
/// 匹配对运行器的封闭集合是穷尽的；扩展运行器词汇会在编译期强制重新审视此函数。
fn translate_status(status: RunnerStepStatus) -> ScenarioExecutionStatus {
    match status {
        RunnerStepStatus::Ok => ScenarioExecutionStatus::Ok,
        RunnerStepStatus::StepDefinitionPending => ScenarioExecutionStatus::StepDefinitionPending,
        RunnerStepStatus::UndefinedStep => ScenarioExecutionStatus::UndefinedStep,
        RunnerStepStatus::BindingError => ScenarioExecutionStatus::BindingError,
        RunnerStepStatus::TestError => ScenarioExecutionStatus::TestError,
        RunnerStepStatus::Skipped => ScenarioExecutionStatus::Skipped,
    }
}

/// Runner-supplied context for a feature that is about to start.
/// The recorder only reads it. / 运行器提供的即将开始的功能的上下文。记录器只读取它。
#[derive(Debug, Clone, Copy)]
pub struct FeatureInfo<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub folder_path: &'a str,
}

/// Runner-supplied context for a scenario that is about to start.
/// 运行器提供的即将开始的场景的上下文。
#[derive(Debug, Clone, Copy)]
pub struct ScenarioInfo<'a> {
    pub title: &'a str,
    pub tags: &'a [String],
}

/// A stateful consumer of lifecycle events that builds a [`TestExecution`]
/// tree, strictly top-down and append-only. One instance records one run;
/// independent instances never interfere, so separate runs can be recorded
/// side by side.
///
/// 构建 [`TestExecution`] 树的有状态生命周期事件消费者，
/// 严格自顶向下、仅追加。一个实例记录一次运行；
/// 独立实例互不干扰，因此可以并排记录不同的运行。
///
/// Containers are never closed explicitly: a feature or scenario stays
/// "current" until the next sibling starts or the run ends.
#[derive(Debug)]
pub struct RunRecorder {
    test_project: String,
    execution: Option<TestExecution>,
    current_feature: Option<usize>,
    current_scenario: Option<usize>,
    /// Start timestamps of in-flight steps, keyed by the runner's step
    /// identity. Owned here, not stashed on the runner's context.
    /// 进行中步骤的开始时间戳，以运行器的步骤标识为键。
    /// 由此处拥有，而不是存放在运行器的上下文中。
    step_starts: HashMap<String, DateTime<Utc>>,
}

impl RunRecorder {
    /// Creates a recorder for the given test project identifier.
    /// 为给定的测试项目标识符创建记录器。
    pub fn new(test_project: impl Into<String>) -> Self {
        Self {
            test_project: test_project.into(),
            execution: None,
            current_feature: None,
            current_scenario: None,
            step_starts: HashMap::new(),
        }
    }

    /// Begins a new run: creates the execution root with a provisional end
    /// timestamp equal to the start timestamp.
    /// 开始新的运行：创建执行根节点，临时结束时间戳等于开始时间戳。
    pub fn on_run_start(&mut self) {
        let now = Utc::now();
        self.execution = Some(TestExecution {
            test_project: self.test_project.clone(),
            execution_start_timestamp: now,
            execution_end_timestamp: now,
            features: Vec::new(),
        });
        self.current_feature = None;
        self.current_scenario = None;
        self.step_starts.clear();
    }

    /// Appends a new feature to the execution and makes it current. The
    /// previous feature, if any, is implicitly closed.
    /// 向执行追加新功能并使其成为当前功能。先前的功能（如有）被隐式关闭。
    pub fn on_feature_start(&mut self, feature: &FeatureInfo<'_>) -> Result<(), RecorderError> {
        let execution = self
            .execution
            .as_mut()
            .ok_or(RecorderError::NoRunInProgress)?;

        execution.features.push(FeatureResult {
            name: feature.title.to_string(),
            description: feature.description.map(str::to_string),
            relative_path: feature.folder_path.to_string(),
            scenarios: Vec::new(),
        });
        self.current_feature = Some(execution.features.len() - 1);
        self.current_scenario = None;
        Ok(())
    }

    /// Appends a new scenario to the current feature and makes it current.
    /// 向当前功能追加新场景并使其成为当前场景。
    pub fn on_scenario_start(&mut self, scenario: &ScenarioInfo<'_>) -> Result<(), RecorderError> {
        let feature = self.current_feature_mut()?;
        feature.scenarios.push(ScenarioResult {
            name: scenario.title.to_string(),
            tags: scenario.tags.to_vec(),
            steps: Vec::new(),
        });
        self.current_scenario = Some(feature.scenarios.len() - 1);
        Ok(())
    }

    /// Records the start timestamp of a step for later duration computation.
    /// 记录步骤的开始时间戳，供之后计算耗时。
    pub fn on_step_start(&mut self, step_id: &str) -> Result<(), RecorderError> {
        self.current_scenario_mut()?;
        self.step_starts.insert(step_id.to_string(), Utc::now());
        Ok(())
    }

    /// Ends a step: computes its duration from the recorded start, translates
    /// the runner status, and appends the fully-formed step to the current
    /// scenario.
    /// 结束步骤：根据记录的开始时间计算耗时，转换运行器状态，
    /// 并将完整成形的步骤追加到当前场景。
    pub fn on_step_end(
        &mut self,
        step_id: &str,
        kind: StepKind,
        text: &str,
        status: RunnerStepStatus,
        error_message: Option<&str>,
    ) -> Result<(), RecorderError> {
        let started_at = self
            .step_starts
            .remove(step_id)
            .ok_or_else(|| RecorderError::UnknownStep(step_id.to_string()))?;
        // Clock adjustments can make the difference negative; the wire
        // format requires a non-negative duration.
        let duration_ms = (Utc::now() - started_at).num_milliseconds().max(0) as u64;

        let scenario = self.current_scenario_mut()?;
        scenario.steps.push(StepResult {
            keyword: kind.to_string(),
            text: text.to_string(),
            status: translate_status(status),
            duration_in_milliseconds: duration_ms,
            error_message: error_message.map(str::to_string),
        });
        Ok(())
    }

    /// Finalizes the run by overwriting the execution's end timestamp.
    /// 通过覆写执行的结束时间戳来最终确定运行。
    pub fn on_run_end(&mut self) -> Result<(), RecorderError> {
        let execution = self
            .execution
            .as_mut()
            .ok_or(RecorderError::NoRunInProgress)?;
        execution.execution_end_timestamp = Utc::now();
        Ok(())
    }

    /// Read access to the tree built so far. / 只读访问已构建的树。
    pub fn execution(&self) -> Option<&TestExecution> {
        self.execution.as_ref()
    }

    /// Consumes the recorder and yields the finished result tree.
    /// 消费记录器并产出最终的结果树。
    pub fn into_execution(self) -> Result<TestExecution, RecorderError> {
        self.execution.ok_or(RecorderError::NoRunInProgress)
    }

    fn current_feature_mut(&mut self) -> Result<&mut FeatureResult, RecorderError> {
        let execution = self
            .execution
            .as_mut()
            .ok_or(RecorderError::NoRunInProgress)?;
        let index = self
            .current_feature
            .ok_or(RecorderError::NoFeatureInProgress)?;
        Ok(&mut execution.features[index])
    }

    fn current_scenario_mut(&mut self) -> Result<&mut ScenarioResult, RecorderError> {
        let scenario_index = self
            .current_scenario
            .ok_or(RecorderError::NoScenarioInProgress)?;
        let feature = self.current_feature_mut()?;
        Ok(&mut feature.scenarios[scenario_index])
    }
}
