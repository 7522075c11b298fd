use crate::app::console::Console;
use crate::config::DEFAULT_TITLE;
use crate::core::registry::ObjectRegistry;
use crate::core::summary::{SummaryFormat, SystemSummary};
use crate::domain::model::QuantumObject;
use crate::domain::ports::EmergencyCooling;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

pub const BANNER: &str = "=== QUANTUM CHAOS MANAGEMENT SYSTEM ===";
pub const EMPTY_REGISTRY: &str = "No objects have been added yet.";
pub const NOTHING_TO_COOL: &str = "No objects available for cooling.";
const RULE_WIDTH: usize = 50;
const SEPARATOR: &str = "---";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddObject,
    ListObjects,
    AnalyzeDanger,
    EmergencyCooling,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::AddObject,
        MenuChoice::ListObjects,
        MenuChoice::AnalyzeDanger,
        MenuChoice::EmergencyCooling,
        MenuChoice::Exit,
    ];

    /// 1-based, as shown in the menu.
    pub fn from_number(number: usize) -> Option<Self> {
        number.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::AddObject => "Add New Object",
            MenuChoice::ListObjects => "List Objects (Status Report)",
            MenuChoice::AnalyzeDanger => "Analyze Danger",
            MenuChoice::EmergencyCooling => {
                "Run Emergency Cooling (cooling-capable objects only)"
            }
            MenuChoice::Exit => "Exit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// The interactive control panel. Owns the registry for the whole session.
pub struct Shell<R, W> {
    console: Console<R, W>,
    registry: ObjectRegistry,
    title: String,
    summary_format: SummaryFormat,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, registry: ObjectRegistry) -> Self {
        Self {
            console: Console::new(input, output),
            registry,
            title: DEFAULT_TITLE.to_string(),
            summary_format: SummaryFormat::Text,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_summary_format(mut self, format: SummaryFormat) -> Self {
        self.summary_format = format;
        self
    }

    pub fn registry(&self) -> &ObjectRegistry {
        &self.registry
    }

    pub fn output(&self) -> &W {
        self.console.output()
    }

    pub fn into_parts(self) -> (ObjectRegistry, W) {
        (self.registry, self.console.into_output())
    }

    /// Runs the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> Result<SystemSummary> {
        tracing::info!("🚀 Control panel started with {} object(s)", self.registry.len());
        self.console.say(BANNER)?;
        self.console.say("")?;

        loop {
            self.print_menu()?;
            let prompt = format!("Your choice (1-{}): ", MenuChoice::ALL.len());
            let choice = match self.console.read_menu_choice(&prompt, MenuChoice::ALL.len())? {
                Some(number) => MenuChoice::from_number(number).unwrap_or(MenuChoice::Exit),
                None => {
                    tracing::info!("Input closed, leaving the control panel");
                    MenuChoice::Exit
                }
            };
            tracing::debug!(?choice, "Menu selection");

            let flow = match choice {
                MenuChoice::AddObject => self.add_object()?,
                MenuChoice::ListObjects => self.list_objects()?,
                MenuChoice::AnalyzeDanger => self.analyze_danger()?,
                MenuChoice::EmergencyCooling => self.emergency_cooling()?,
                MenuChoice::Exit => Flow::Exit,
            };

            if flow == Flow::Exit {
                break;
            }
        }

        let summary = self.print_summary()?;
        self.console.say("\nShutting down...")?;
        Ok(summary)
    }

    /// Non-interactive pass: report, assess and cool every object once.
    pub fn run_walkthrough(&mut self) -> Result<SystemSummary> {
        tracing::info!("Walkthrough over {} object(s)", self.registry.len());
        self.console.say(BANNER)?;
        self.console.say("")?;

        for object in self.registry.iter_mut() {
            let status = object.status_report();
            let danger = object.danger_level();
            let cooling = object.cooling().map(|mut c| c.emergency_cooling());

            self.console.say(status)?;
            self.console.say(danger.message)?;
            if let Some(report) = cooling {
                self.console.say(report.message)?;
            }
            self.console.say(SEPARATOR)?;
        }

        let summary = self.print_summary()?;
        self.console.say("\nWalkthrough complete.")?;
        Ok(summary)
    }

    fn print_menu(&mut self) -> Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        self.console.say(format!("\n{}", rule))?;
        self.console.say(&self.title)?;
        self.console.say(&rule)?;
        for (index, choice) in MenuChoice::ALL.iter().enumerate() {
            self.console.say(format!("{}. {}", index + 1, choice.label()))?;
        }
        Ok(())
    }

    fn add_object(&mut self) -> Result<Flow> {
        self.console.say("\n=== ADD NEW OBJECT ===")?;
        self.console.say("1. Storage")?;
        self.console.say("2. Method")?;

        let Some(kind) = self.console.read_menu_choice("Select object type (1-2): ", 2)? else {
            return Ok(Flow::Exit);
        };
        let Some(id) = self.console.read_line("Enter ID: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(stability) = self.console.read_stability("Enter stability (0-100): ")? else {
            return Ok(Flow::Exit);
        };

        let object = if kind == 1 {
            let Some(supervisor) = self.console.read_line("Enter shift supervisor: ")? else {
                return Ok(Flow::Exit);
            };
            QuantumObject::storage(id, supervisor)
        } else {
            let Some(analysis_type) = self.console.read_line("Enter analysis type: ")? else {
                return Ok(Flow::Exit);
            };
            QuantumObject::method(id, analysis_type)
        };
        let object = object.with_stability(stability.value())?;

        self.console.say(format!(
            "✓ {} {} added successfully!",
            object.kind().name(),
            object.id()
        ))?;
        tracing::info!(id = object.id(), kind = object.kind().name(), "Object added");
        self.registry.add(object);
        Ok(Flow::Continue)
    }

    fn list_objects(&mut self) -> Result<Flow> {
        self.console.say("\n=== OBJECT LIST (STATUS REPORT) ===")?;
        if self.registry.is_empty() {
            self.console.say(EMPTY_REGISTRY)?;
            return Ok(Flow::Continue);
        }

        for (index, report) in self.registry.status_reports().into_iter().enumerate() {
            self.console.say(format!("\n{}. Object:", index + 1))?;
            self.console.say(report)?;
        }
        Ok(Flow::Continue)
    }

    fn analyze_danger(&mut self) -> Result<Flow> {
        self.console.say("\n=== DANGER ANALYSIS ===")?;
        if self.registry.is_empty() {
            self.console.say(EMPTY_REGISTRY)?;
            return Ok(Flow::Continue);
        }

        for report in self.registry.danger_reports() {
            self.console.say(report.message)?;
            self.console.say(SEPARATOR)?;
        }
        Ok(Flow::Continue)
    }

    fn emergency_cooling(&mut self) -> Result<Flow> {
        self.console.say("\n=== EMERGENCY COOLING ===")?;
        if self.registry.is_empty() {
            self.console.say(EMPTY_REGISTRY)?;
            return Ok(Flow::Continue);
        }

        let reports = self.registry.cool_all();
        if reports.is_empty() {
            self.console.say(NOTHING_TO_COOL)?;
        }
        for report in reports {
            self.console.say(report.message)?;
            self.console.say(SEPARATOR)?;
        }
        Ok(Flow::Continue)
    }

    fn print_summary(&mut self) -> Result<SystemSummary> {
        let summary = self.registry.summary();
        let rendered = summary.render(self.summary_format)?;
        self.console.say(format!("\n{}", rendered))?;
        tracing::info!(
            total = summary.total,
            critical = summary.critical,
            safe = summary.safe,
            moderate = summary.moderate,
            "📊 Session summary"
        );
        Ok(summary)
    }
}
