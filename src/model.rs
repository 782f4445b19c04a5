use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Banderas que se muestran en cada ronda.
pub const CHOICES_PER_ROUND: usize = 3;
/// Rondas que forman una partida.
pub const ROUNDS_PER_SESSION: u32 = 3;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Country {
    pub name: String,
    // Imagen de la bandera; si falta se usa el nombre
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset: Option<String>,
}

impl Country {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            asset: None,
        }
    }

    pub fn asset(&self) -> &str {
        self.asset.as_deref().unwrap_or(&self.name)
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("el catálogo tiene {found} países, se necesitan al menos {required}")]
    TooSmall { found: usize, required: usize },
    #[error("país duplicado en el catálogo: {0}")]
    DuplicateCountry(String),
    #[error("no se pudo leer el catálogo YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Conjunto fijo de países validado: al menos `CHOICES_PER_ROUND`, sin repetidos.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    countries: Vec<Country>,
}

impl Catalog {
    pub fn new(countries: Vec<Country>) -> Result<Self, CatalogError> {
        if countries.len() < CHOICES_PER_ROUND {
            return Err(CatalogError::TooSmall {
                found: countries.len(),
                required: CHOICES_PER_ROUND,
            });
        }

        let mut seen = HashSet::new();
        for country in &countries {
            if !seen.insert(country.name.as_str()) {
                return Err(CatalogError::DuplicateCountry(country.name.clone()));
            }
        }

        Ok(Self { countries })
    }

    /// Atajo para catálogos escritos a mano (tests, demos).
    pub fn from_names<I, S>(names: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(names.into_iter().map(Country::new).collect())
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let countries: Vec<Country> = serde_yaml::from_str(yaml)?;
        Self::new(countries)
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn into_countries(self) -> Vec<Country> {
        self.countries
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    AwaitingGuess,
    ShowingRoundFeedback,
    ShowingSessionComplete,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Wrong,
}

/// Último toque del jugador, guardado tal cual se vio en pantalla.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    pub index: usize,
    pub country: Country,
    pub verdict: Verdict,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    RoundFeedback {
        verdict: Verdict,
        guessed: Country,
        correct: u32,
        wrong: u32,
    },
    SessionComplete {
        verdict: Verdict,
        correct: u32,
        wrong: u32,
    },
}

impl GuessOutcome {
    pub fn verdict(&self) -> Verdict {
        match self {
            GuessOutcome::RoundFeedback { verdict, .. }
            | GuessOutcome::SessionComplete { verdict, .. } => *verdict,
        }
    }

    pub fn is_session_complete(&self) -> bool {
        matches!(self, GuessOutcome::SessionComplete { .. })
    }
}
