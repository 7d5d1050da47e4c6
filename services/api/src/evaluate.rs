use crate::infra::parse_attribute;
use clap::Args;
use property_valuation::config::AppConfig;
use property_valuation::error::AppError;
use property_valuation::evaluation::{
    EvaluationGateway, EvaluationRequest, HttpValuationEngine, ValuationSummary,
};
use serde_json::Value;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Built-up area in square meters
    #[arg(long)]
    pub(crate) area: f64,
    /// City the property is located in
    #[arg(long)]
    pub(crate) city: String,
    /// Extra property attribute forwarded to the engine (repeatable, key=value)
    #[arg(long = "attr", value_parser = parse_attribute)]
    pub(crate) attributes: Vec<(String, Value)>,
    /// Print Western digits instead of Arabic-Indic digits
    #[arg(long)]
    pub(crate) latin: bool,
}

impl EvaluateArgs {
    fn into_request(self) -> EvaluationRequest {
        self.attributes.into_iter().fold(
            EvaluationRequest::new(self.area, self.city),
            |request, (key, value)| request.with_attribute(key, value),
        )
    }
}

pub(crate) async fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let use_arabic = !args.latin;

    let engine = Arc::new(HttpValuationEngine::new(config.valuation.engine_url.clone()));
    let gateway = EvaluationGateway::new(engine, config.gateway());

    let request = args.into_request();
    match gateway.evaluate(&request).await {
        Ok(result) => {
            print!("{}", ValuationSummary::from_result(&result, use_arabic));
            Ok(())
        }
        Err(err) => {
            let envelope = gateway.error_response(&err);
            match serde_json::to_string_pretty(&envelope) {
                Ok(rendered) => eprintln!("{rendered}"),
                Err(_) => eprintln!("{}: {}", envelope.error, envelope.message),
            }
            Err(err.into())
        }
    }
}
