use serde::Serialize;

/// Additional site information checkboxes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Extras {
    #[serde(rename = "haveDrawings")]
    pub have_drawings: bool,
    #[serde(rename = "haveBOM")]
    pub have_bom: bool,
    #[serde(rename = "existingSite")]
    pub existing_site: bool,
    #[serde(rename = "corporateAccount")]
    pub corporate_account: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtraFlag {
    HaveDrawings,
    HaveBom,
    ExistingSite,
    CorporateAccount,
}

impl ExtraFlag {
    pub const ALL: [ExtraFlag; 4] = [
        ExtraFlag::HaveDrawings,
        ExtraFlag::HaveBom,
        ExtraFlag::ExistingSite,
        ExtraFlag::CorporateAccount,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HaveDrawings => "haveDrawings",
            Self::HaveBom => "haveBOM",
            Self::ExistingSite => "existingSite",
            Self::CorporateAccount => "corporateAccount",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|flag| flag.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::HaveDrawings => "Have Drawings",
            Self::HaveBom => "Have BOM",
            Self::ExistingSite => "Existing Site",
            Self::CorporateAccount => "Corporate Account",
        }
    }
}

impl Extras {
    pub fn get(
        &self,
        flag: ExtraFlag,
    ) -> bool {
        match flag {
            ExtraFlag::HaveDrawings => self.have_drawings,
            ExtraFlag::HaveBom => self.have_bom,
            ExtraFlag::ExistingSite => self.existing_site,
            ExtraFlag::CorporateAccount => self.corporate_account,
        }
    }

    pub fn set(
        &mut self,
        flag: ExtraFlag,
        value: bool,
    ) {
        match flag {
            ExtraFlag::HaveDrawings => self.have_drawings = value,
            ExtraFlag::HaveBom => self.have_bom = value,
            ExtraFlag::ExistingSite => self.existing_site = value,
            ExtraFlag::CorporateAccount => self.corporate_account = value,
        }
    }
}
