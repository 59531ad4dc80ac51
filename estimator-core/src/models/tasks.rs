use serde::Serialize;

/// Service options toggled on the estimate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tasks {
    pub engineering: bool,
    pub programming: bool,
    pub commissioning: bool,
    pub training: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskFlag {
    Engineering,
    Programming,
    Commissioning,
    Training,
}

impl TaskFlag {
    pub const ALL: [TaskFlag; 4] = [
        TaskFlag::Engineering,
        TaskFlag::Programming,
        TaskFlag::Commissioning,
        TaskFlag::Training,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Engineering => "engineering",
            Self::Programming => "programming",
            Self::Commissioning => "commissioning",
            Self::Training => "training",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|flag| flag.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Engineering => "Engineering",
            Self::Programming => "Programming",
            Self::Commissioning => "Commissioning",
            Self::Training => "Training",
        }
    }
}

impl Tasks {
    pub fn get(
        &self,
        flag: TaskFlag,
    ) -> bool {
        match flag {
            TaskFlag::Engineering => self.engineering,
            TaskFlag::Programming => self.programming,
            TaskFlag::Commissioning => self.commissioning,
            TaskFlag::Training => self.training,
        }
    }

    pub fn set(
        &mut self,
        flag: TaskFlag,
        value: bool,
    ) {
        match flag {
            TaskFlag::Engineering => self.engineering = value,
            TaskFlag::Programming => self.programming = value,
            TaskFlag::Commissioning => self.commissioning = value,
            TaskFlag::Training => self.training = value,
        }
    }
}
