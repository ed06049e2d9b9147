/// UI language. French is the launch market, so anything unrecognised falls
/// back to it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UserLanguage {
    #[default]
    Fr,
    En,
}

impl UserLanguage {
    /// Parses an `Accept-Language` style value, looking only at the first tag.
    pub fn from_raw(raw: Option<&str>) -> Self {
        let candidate = raw
            .unwrap_or("fr")
            .split(',')
            .next()
            .unwrap_or("fr")
            .split([';', '-', '_'])
            .next()
            .unwrap_or("fr")
            .trim()
            .to_lowercase();
        match candidate.as_str() {
            "en" => UserLanguage::En,
            _ => UserLanguage::Fr,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "fr" => Some(UserLanguage::Fr),
            "en" => Some(UserLanguage::En),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserLanguage::Fr => "fr",
            UserLanguage::En => "en",
        }
    }
}
