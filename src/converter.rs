use std::sync::Arc;

use crate::models::{ConversionInput, ConversionResult};
use crate::rates::RateSource;
use crate::symbols::{SymbolLookup, SymbolTable};
use crate::{AppError, Result};

/// Currency conversion service. Resolves symbols to codes, fetches rates once
/// and multiplies the amount through.
#[derive(Clone)]
pub struct Converter {
    symbols: Arc<dyn SymbolLookup>,
    rates: Arc<dyn RateSource>,
}

impl Converter {
    pub fn new(rates: Arc<dyn RateSource>) -> Self {
        Self::with_lookup(Arc::new(SymbolTable::new()), rates)
    }
    pub fn with_lookup(symbols: Arc<dyn SymbolLookup>, rates: Arc<dyn RateSource>) -> Self {
        Self { symbols, rates }
    }

    /// Convert `amount` from `input_currency` into `output_currency`, or into
    /// every currency the rate source knows when no output is given.
    pub async fn convert(
        &self,
        amount: f64,
        input_currency: &str,
        output_currency: Option<&str>,
    ) -> Result<ConversionResult> {
        let base = self.resolve_input(input_currency)?;
        let targets = output_currency.map(|currency| self.resolve_output(currency));
        tracing::debug!(
            "converting {amount} {base} -> {}",
            targets
                .as_ref()
                .map(|t| t.join(","))
                .unwrap_or_else(|| "all currencies".to_string())
        );
        let rates = self.rates.get_rates(&base, targets.as_deref()).await?;
        let output = rates
            .into_iter()
            .map(|(code, rate)| (code, amount * rate))
            .collect();
        Ok(ConversionResult {
            input: ConversionInput {
                amount,
                currency: base,
            },
            output,
        })
    }

    /// Input resolution must collapse to a single base code; one amount
    /// cannot be denominated in several currencies at once. Unknown tokens
    /// pass through untouched and are left for the rate API to validate.
    fn resolve_input(&self, currency: &str) -> Result<String> {
        let mut codes = self.symbols.resolve(currency);
        match codes.len() {
            0 => Ok(currency.to_string()),
            1 => Ok(codes.remove(0)),
            _ => Err(AppError::TooManyInputCurrencies(codes)),
        }
    }

    /// Output resolution keeps every match; fanning out over all of them is
    /// intended. Unknown tokens become a single-element target list.
    fn resolve_output(&self, currency: &str) -> Vec<String> {
        let codes = self.symbols.resolve(currency);
        if codes.is_empty() {
            vec![currency.to_string()]
        } else {
            codes
        }
    }
}
