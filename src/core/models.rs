//! # Result Model Module / 结果模型模块
//!
//! This module defines the hierarchical result tree of a behavior-driven test
//! run: the execution root, its features, their scenarios and steps, plus the
//! derived status rollups used by the reporting layer.
//!
//! 此模块定义了行为驱动测试运行的分层结果树：
//! 执行根节点、其功能、场景和步骤，以及报告层使用的派生状态汇总。

use crate::infra::t;
use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// The terminal status of a single executed step, as reported by the test
/// runner. This is a closed set; the wire format encodes the variant names
/// as strings.
///
/// 单个已执行步骤的最终状态，由测试运行器报告。
/// 这是一个封闭集合；线上格式将变体名称编码为字符串。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ScenarioExecutionStatus {
    /// The step executed and passed. / 步骤已执行并通过。
    Ok,
    /// A step definition exists but is marked pending. / 步骤定义存在但标记为待定。
    StepDefinitionPending,
    /// No step definition matched the step text. / 没有步骤定义与步骤文本匹配。
    UndefinedStep,
    /// The step definition could not be bound or invoked. / 步骤定义无法绑定或调用。
    BindingError,
    /// The step executed and raised an error. / 步骤已执行并引发错误。
    TestError,
    /// The step was skipped, usually after an earlier failure. / 步骤被跳过，通常在先前的失败之后。
    Skipped,
}

impl ScenarioExecutionStatus {
    const NAMES: &'static [&'static str] = &[
        "Ok",
        "StepDefinitionPending",
        "UndefinedStep",
        "BindingError",
        "TestError",
        "Skipped",
    ];

    /// Parses a wire-format status token. Producers differ in casing
    /// convention (camelCase vs PascalCase), so the match is
    /// case-insensitive over the closed variant set.
    ///
    /// 解析线上格式的状态标记。生产者的大小写约定不同
    /// （camelCase 与 PascalCase），因此匹配对封闭变体集合不区分大小写。
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "ok" => Some(Self::Ok),
            "stepdefinitionpending" => Some(Self::StepDefinitionPending),
            "undefinedstep" => Some(Self::UndefinedStep),
            "bindingerror" => Some(Self::BindingError),
            "testerror" => Some(Self::TestError),
            "skipped" => Some(Self::Skipped),
            _ => None,
        }
    }

    /// The canonical wire name of this status. / 此状态的规范线上名称。
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "Ok",
            Self::StepDefinitionPending => "StepDefinitionPending",
            Self::UndefinedStep => "UndefinedStep",
            Self::BindingError => "BindingError",
            Self::TestError => "TestError",
            Self::Skipped => "Skipped",
        }
    }
}

impl<'de> Deserialize<'de> for ScenarioExecutionStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).ok_or_else(|| de::Error::unknown_variant(&raw, Self::NAMES))
    }
}

/// The mutually exclusive rollup of a scenario (or step) for reporting.
/// Every scenario classifies as exactly one of these; Inconclusive takes
/// precedence over Failed for non-successful scenarios.
///
/// 场景（或步骤）的互斥报告汇总。
/// 每个场景恰好归为其中一类；对于未成功的场景，Inconclusive 优先于 Failed。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioOutcome {
    Passed,
    Failed,
    Inconclusive,
}

impl ScenarioOutcome {
    /// The CSS class used by the HTML report. Locale-independent.
    /// HTML 报告使用的 CSS 类。与语言环境无关。
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Passed => "Passed",
            Self::Failed => "Failed",
            Self::Inconclusive => "Inconclusive",
        }
    }

    /// The localized display label for this outcome.
    /// 此结果的本地化显示标签。
    pub fn status_str(&self, locale: &str) -> String {
        match self {
            Self::Passed => t!("report.status_passed", locale = locale).to_string(),
            Self::Failed => t!("report.status_failed", locale = locale).to_string(),
            Self::Inconclusive => t!("report.status_inconclusive", locale = locale).to_string(),
        }
    }
}

/// The result of one executed step. Steps are fully formed at construction;
/// there is no partially-built step visible in the tree.
///
/// 一个已执行步骤的结果。步骤在构造时即完整成形；
/// 树中不存在部分构建的步骤。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepResult {
    /// The kind of step ("Given", "When", "Then"). / 步骤种类（"Given"、"When"、"Then"）。
    #[serde(alias = "Keyword")]
    pub keyword: String,
    /// The step text as written in the scenario. / 场景中书写的步骤文本。
    #[serde(alias = "Text")]
    pub text: String,
    /// The terminal status reported by the runner. / 运行器报告的最终状态。
    #[serde(alias = "Status")]
    pub status: ScenarioExecutionStatus,
    /// Wall-clock duration of the step in milliseconds. / 步骤的实际耗时（毫秒）。
    #[serde(alias = "DurationInMilliseconds")]
    pub duration_in_milliseconds: u64,
    /// The captured error message, if the runner recorded one.
    /// 捕获的错误消息（如果运行器记录了错误）。
    #[serde(default, alias = "ErrorMessage")]
    pub error_message: Option<String>,
}

impl StepResult {
    /// A step is successful iff its status is `Ok`.
    pub fn is_success(&self) -> bool {
        self.status == ScenarioExecutionStatus::Ok
    }

    /// A step is inconclusive iff it was skipped, pending, or undefined.
    pub fn is_inconclusive(&self) -> bool {
        matches!(
            self.status,
            ScenarioExecutionStatus::Skipped
                | ScenarioExecutionStatus::StepDefinitionPending
                | ScenarioExecutionStatus::UndefinedStep
        )
    }

    /// The three-way rollup of this step, for per-step styling.
    /// 此步骤的三态汇总，用于逐步骤样式。
    pub fn outcome(&self) -> ScenarioOutcome {
        if self.is_success() {
            ScenarioOutcome::Passed
        } else if self.is_inconclusive() {
            ScenarioOutcome::Inconclusive
        } else {
            ScenarioOutcome::Failed
        }
    }
}

/// The result of one scenario: its steps in execution order plus the tags it
/// carried. Tag order is preserved and duplicates are permitted.
///
/// 一个场景的结果：按执行顺序排列的步骤及其携带的标签。
/// 标签顺序被保留，允许重复。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioResult {
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "Tags")]
    pub tags: Vec<String>,
    #[serde(alias = "Steps")]
    pub steps: Vec<StepResult>,
}

impl ScenarioResult {
    /// A scenario is successful iff all of its steps are successful.
    /// Vacuously true for a scenario with zero steps.
    pub fn is_success(&self) -> bool {
        self.steps.iter().all(StepResult::is_success)
    }

    /// A scenario is inconclusive iff any of its steps is inconclusive.
    pub fn is_inconclusive(&self) -> bool {
        self.steps.iter().any(StepResult::is_inconclusive)
    }

    /// Classifies this scenario as exactly one of Passed, Failed, or
    /// Inconclusive. A non-successful scenario counts as Inconclusive when it
    /// contains an inconclusive step, otherwise as Failed.
    ///
    /// 将此场景恰好归为 Passed、Failed 或 Inconclusive 之一。
    /// 未成功的场景若包含不确定步骤则计为 Inconclusive，否则计为 Failed。
    pub fn outcome(&self) -> ScenarioOutcome {
        if self.is_success() {
            ScenarioOutcome::Passed
        } else if self.is_inconclusive() {
            ScenarioOutcome::Inconclusive
        } else {
            ScenarioOutcome::Failed
        }
    }
}

/// The result of one feature: the scenarios it contains in execution order.
/// 一个功能的结果：其包含的按执行顺序排列的场景。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureResult {
    #[serde(alias = "Name")]
    pub name: String,
    /// The free-form description from the feature file, if any.
    /// 功能文件中的自由格式描述（如果有）。
    #[serde(default, alias = "Description")]
    pub description: Option<String>,
    /// The folder path of the feature file, relative to the test project.
    /// 功能文件相对于测试项目的文件夹路径。
    #[serde(alias = "RelativePath")]
    pub relative_path: String,
    #[serde(alias = "Scenarios")]
    pub scenarios: Vec<ScenarioResult>,
}

/// Scenario counts per outcome over a whole execution.
/// The three counts partition the scenarios: passed + failed + inconclusive
/// equals the total.
///
/// 整个执行中按结果统计的场景数量。
/// 三个计数划分了所有场景：passed + failed + inconclusive 等于总数。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub passed: usize,
    pub failed: usize,
    pub inconclusive: usize,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.passed + self.failed + self.inconclusive
    }
}

/// The root of the result tree: one recorded test run.
/// 结果树的根节点：一次记录的测试运行。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestExecution {
    /// Identifier of the test project that produced this run.
    /// 产生此运行的测试项目的标识符。
    #[serde(alias = "TestProject")]
    pub test_project: String,
    /// When the run started (UTC). / 运行开始时间（UTC）。
    #[serde(alias = "ExecutionStartTimestamp")]
    pub execution_start_timestamp: DateTime<Utc>,
    /// When the run ended (UTC). Equal to the start timestamp until the run
    /// is finalized, after which end >= start holds.
    /// 运行结束时间（UTC）。在运行最终确定之前等于开始时间，
    /// 之后满足 end >= start。
    #[serde(alias = "ExecutionEndTimestamp")]
    pub execution_end_timestamp: DateTime<Utc>,
    #[serde(alias = "Features")]
    pub features: Vec<FeatureResult>,
}

impl TestExecution {
    /// Iterates all scenarios across all features, in feature-then-scenario
    /// order. / 按功能-场景顺序遍历所有功能中的所有场景。
    pub fn scenarios(&self) -> impl Iterator<Item = &ScenarioResult> {
        self.features.iter().flat_map(|f| f.scenarios.iter())
    }

    /// Computes the per-outcome scenario counts for the summary block.
    /// 计算摘要块的按结果场景计数。
    pub fn summary(&self) -> RunSummary {
        let mut summary = RunSummary::default();
        for scenario in self.scenarios() {
            match scenario.outcome() {
                ScenarioOutcome::Passed => summary.passed += 1,
                ScenarioOutcome::Failed => summary.failed += 1,
                ScenarioOutcome::Inconclusive => summary.inconclusive += 1,
            }
        }
        summary
    }
}
