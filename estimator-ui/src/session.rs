//! Line-command session: one command in, one block of page text out.

use std::str::FromStr;

use estimator_core::form::{EstimateField, ParseFieldPathError, PointsField};
use estimator_core::schema::SubmitError;
use estimator_core::to_pretty_json;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::EstimateSettings;
use crate::controllers::{ChangeError, EstimateController, PointsController};
use crate::render::{EstimatePage, LandingView, NotFoundView, PointsPage, SummaryView};
use crate::routes::Route;

pub const HELP: &str = "\
Commands:
  go <path>            open a page: /, /new or /points
  set <field> <value>  edit a field, e.g. `set systems.0.inputs 12`
  add                  append a row (system or point)
  remove <n>           remove row n
  submit               validate and compile (Update Summary)
  discard              reset the form and clear the result
  show                 print the current page
  summary              print the compiled estimate as a summary
  json                 print the compiled estimate as JSON
  load                 Load From JSON
  save                 Save For Later
  send                 Send to PDS for Quote
  help                 this text
  quit                 leave";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("unknown command '{0}' (try `help`)")]
    UnknownCommand(String),

    #[error("`{command}` needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("'{0}' is not a row number")]
    InvalidIndex(String),

    #[error("no row {0}")]
    NoSuchRow(usize),

    #[error(transparent)]
    Path(#[from] ParseFieldPathError),

    #[error(transparent)]
    Change(#[from] ChangeError),

    #[error("'{0}' has no form (use `go /new` or `go /points`)")]
    NotOnForm(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Go(String),
    Set { field: String, value: String },
    Add,
    Remove(usize),
    Submit,
    Discard,
    Show,
    Summary,
    Json,
    Load,
    Save,
    Send,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = SessionError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        let command = match name {
            "go" => {
                if rest.is_empty() {
                    return Err(SessionError::MissingArgument {
                        command: "go",
                        argument: "a path",
                    });
                }
                Self::Go(rest.to_string())
            }
            "set" => {
                let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                if field.is_empty() {
                    return Err(SessionError::MissingArgument {
                        command: "set",
                        argument: "a field path",
                    });
                }
                Self::Set {
                    field: field.to_string(),
                    value: value.trim().to_string(),
                }
            }
            "add" => Self::Add,
            "remove" => {
                if rest.is_empty() {
                    return Err(SessionError::MissingArgument {
                        command: "remove",
                        argument: "a row number",
                    });
                }
                let index = rest
                    .parse()
                    .map_err(|_| SessionError::InvalidIndex(rest.to_string()))?;
                Self::Remove(index)
            }
            "submit" => Self::Submit,
            "discard" => Self::Discard,
            "show" => Self::Show,
            "summary" => Self::Summary,
            "json" => Self::Json,
            "load" => Self::Load,
            "save" => Self::Save,
            "send" => Self::Send,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(SessionError::UnknownCommand(other.to_string())),
        };
        Ok(command)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Text to print; may be empty.
    Continue(String),
    Quit,
}

/// The shell: the current page plus both form controllers.
#[derive(Debug, Clone)]
pub struct Session {
    route: Route,
    estimate: EstimateController,
    points: PointsController,
}

impl Session {
    pub fn new(settings: EstimateSettings) -> Self {
        Self {
            route: Route::Landing,
            estimate: EstimateController::new(settings),
            points: PointsController::new(),
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn estimate(&self) -> &EstimateController {
        &self.estimate
    }

    pub fn points(&self) -> &PointsController {
        &self.points
    }

    /// Blank lines and `#` comments are ignored.
    pub fn handle_line(
        &mut self,
        line: &str,
    ) -> Result<Outcome, SessionError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(Outcome::Continue(String::new()));
        }
        let command = line.parse::<Command>()?;
        self.handle(command)
    }

    pub fn handle(
        &mut self,
        command: Command,
    ) -> Result<Outcome, SessionError> {
        debug!(?command, route = %self.route, "handling command");
        let text = match command {
            Command::Go(path) => {
                self.route = Route::parse(&path);
                info!(route = %self.route, "navigated");
                self.page()
            }
            Command::Set { field, value } => self.set(&field, &value)?,
            Command::Add => self.add()?,
            Command::Remove(index) => self.remove(index)?,
            Command::Submit => self.submit()?,
            Command::Discard => self.discard()?,
            Command::Show => self.page(),
            Command::Summary => match self.estimate.result().compiled() {
                Some(data) => SummaryView(data).to_string(),
                None => "No results yet.".to_string(),
            },
            Command::Json => match self.estimate.result().compiled() {
                Some(data) => to_pretty_json(data).unwrap_or_else(|e| format!("error: {e}")),
                None => "No results yet.".to_string(),
            },
            Command::Load => "Load From JSON is not available yet.".to_string(),
            Command::Save => "Save For Later is not available yet.".to_string(),
            Command::Send => "Send to PDS for Quote is not available yet.".to_string(),
            Command::Help => HELP.to_string(),
            Command::Quit => return Ok(Outcome::Quit),
        };
        Ok(Outcome::Continue(text))
    }

    /// Renders the current page.
    pub fn page(&self) -> String {
        match &self.route {
            Route::Landing => LandingView.to_string(),
            Route::NewEstimate => EstimatePage(&self.estimate).to_string(),
            Route::Points => PointsPage(&self.points).to_string(),
            Route::NotFound(path) => NotFoundView(path).to_string(),
        }
    }

    fn not_on_form(&self) -> SessionError {
        SessionError::NotOnForm(self.route.path().to_string())
    }

    fn set(
        &mut self,
        field: &str,
        value: &str,
    ) -> Result<String, SessionError> {
        match self.route {
            Route::NewEstimate => {
                let field: EstimateField = field.parse()?;
                self.estimate.on_change(field, value)?;
                let view = self.estimate.field_view(field).map_err(ChangeError::from)?;
                Ok(format!("{field}\n{view}"))
            }
            Route::Points => {
                let field: PointsField = field.parse()?;
                self.points.on_change(field, value)?;
                let view = self.points.field_view(field).map_err(ChangeError::from)?;
                Ok(format!("{field}\n{view}"))
            }
            Route::Landing | Route::NotFound(_) => Err(self.not_on_form()),
        }
    }

    fn add(&mut self) -> Result<String, SessionError> {
        match self.route {
            Route::NewEstimate => {
                let id = self.estimate.append_system();
                let index = self.estimate.form().systems.len() - 1;
                Ok(format!("Added system {index} ({id})"))
            }
            Route::Points => {
                let id = self.points.append_point();
                let index = self.points.form().points.len() - 1;
                Ok(format!("Added point {index} ({id})"))
            }
            Route::Landing | Route::NotFound(_) => Err(self.not_on_form()),
        }
    }

    fn remove(
        &mut self,
        index: usize,
    ) -> Result<String, SessionError> {
        match self.route {
            Route::NewEstimate => self
                .estimate
                .remove_system(index)
                .map(|_| format!("Removed system {index}"))
                .ok_or(SessionError::NoSuchRow(index)),
            Route::Points => self
                .points
                .remove_point(index)
                .map(|_| format!("Removed point {index}"))
                .ok_or(SessionError::NoSuchRow(index)),
            Route::Landing | Route::NotFound(_) => Err(self.not_on_form()),
        }
    }

    fn submit(&mut self) -> Result<String, SessionError> {
        match self.route {
            Route::NewEstimate => Ok(match self.estimate.submit() {
                Ok(()) => self.page(),
                Err(err) => {
                    aborted(&err, self.estimate.focused().map(|f| f.to_string()))
                }
            }),
            Route::Points => Ok(match self.points.submit() {
                Ok(()) => self.page(),
                Err(err) => aborted(&err, self.points.focused().map(|f| f.to_string())),
            }),
            Route::Landing | Route::NotFound(_) => Err(self.not_on_form()),
        }
    }

    fn discard(&mut self) -> Result<String, SessionError> {
        match self.route {
            Route::NewEstimate => self.estimate.discard(),
            Route::Points => self.points.discard(),
            Route::Landing | Route::NotFound(_) => return Err(self.not_on_form()),
        }
        Ok(self.page())
    }
}

/// Text for a rejected submit: the reason, every field error and the focus target.
fn aborted<F: std::fmt::Display>(
    err: &SubmitError<F>,
    focus: Option<String>,
) -> String {
    let mut lines = vec![format!("Submit aborted: {err}")];
    if let Some(errors) = err.validation_errors() {
        lines.extend(errors.iter().map(|error| format!("  {error}")));
    }
    if let Some(focus) = focus {
        lines.push(format!("Focus: {focus}"));
    }
    lines.join("\n")
}
