use std::{error::Error, fmt::Display};

#[derive(Debug, Clone)]
pub enum AppError {
    TooManyInputCurrencies(Vec<String>),
    RatesNotAvailable(String),
}

pub type Result<T> = core::result::Result<T, AppError>;

impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::TooManyInputCurrencies(codes) => write!(
                f,
                "Given symbol represents multiple currencies. This format is not supported \
                 for input currency. Please choose only one from provided currency code list. \
                 Currencies: {codes:?}"
            ),
            AppError::RatesNotAvailable(reason) => {
                write!(f, "Rates for provided currency not found. {reason}")
            }
        }
    }
}

impl Error for AppError {}

impl From<reqwest::Error> for AppError {
    fn from(value: reqwest::Error) -> Self {
        Self::RatesNotAvailable(value.to_string())
    }
}
