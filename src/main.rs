use std::sync::Arc;

use clap::Parser;
use currency_converter::converter::Converter;
use currency_converter::rates::RateClient;
use serde_json::json;
use tracing_subscriber::EnvFilter;

/// Command line currency converter. Accepts currency codes and symbols;
/// an ambiguous output symbol converts into every matching currency.
#[derive(Debug, Parser)]
#[command(name = "currency-converter")]
struct Args {
    /// Amount of currency to be converted in floating point format.
    #[arg(short = 'a', long = "amount", value_name = "VALUE")]
    amount: f64,
    /// Input currency code (3 letters) or symbol.
    #[arg(short = 'i', long = "input_currency", value_name = "CURRENCY")]
    input_currency: String,
    /// Output currency code (3 letters) or symbol.
    #[arg(short = 'o', long = "output_currency", value_name = "CURRENCY")]
    output_currency: Option<String>,
}

#[tokio::main]
async fn main() {
    // logs go to stderr, stdout carries nothing but the result json
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e)
            if matches!(
                e.kind(),
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
            ) =>
        {
            e.exit()
        }
        Err(_) => {
            println!("{}", json!({ "error": "Argument parse error" }));
            std::process::exit(1);
        }
    };
    let converter = Converter::new(Arc::new(RateClient::new()));
    match converter
        .convert(args.amount, &args.input_currency, args.output_currency.as_deref())
        .await
    {
        Ok(result) => match serde_json::to_string_pretty(&result) {
            Ok(body) => println!("{body}"),
            Err(e) => {
                println!("{}", json!({ "error": e.to_string() }));
                std::process::exit(1);
            }
        },
        Err(e) => {
            println!("{}", json!({ "error": e.to_string() }));
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_and_optional_output() {
        let args = Args::try_parse_from([
            "currency-converter",
            "--amount",
            "100.5",
            "--input_currency",
            "CAD",
            "--output_currency",
            "CZK",
        ])
        .unwrap();
        assert_eq!(args.amount, 100.5);
        assert_eq!(args.input_currency, "CAD");
        assert_eq!(args.output_currency.as_deref(), Some("CZK"));

        let args =
            Args::try_parse_from(["currency-converter", "-a", "12", "-i", "€"]).unwrap();
        assert_eq!(args.amount, 12.0);
        assert_eq!(args.output_currency, None);
    }

    #[test]
    fn amount_must_be_a_float() {
        let err = Args::try_parse_from([
            "currency-converter",
            "--amount",
            "ten",
            "--input_currency",
            "CAD",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn amount_and_input_currency_are_required() {
        assert!(Args::try_parse_from(["currency-converter", "-a", "10"]).is_err());
        assert!(Args::try_parse_from(["currency-converter", "-i", "EUR"]).is_err());
    }
}
