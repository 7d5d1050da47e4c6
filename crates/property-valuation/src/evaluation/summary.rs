use std::fmt;

use serde::Serialize;
use serde_json::Value;

use super::engine::EvaluationResult;
use crate::formatting::{
    color_for, format_confidence, format_currency, format_date, format_days,
    format_price_per_meter, format_price_range, format_rent_per_meter, format_transaction_count,
    format_volume_billions, format_yoy_change, parse_display_date, ColorCategory, ColorToken,
    YearOverYearChange, PLACEHOLDER,
};

/// Display-ready rendering of the well-known fields of an evaluation result.
///
/// Fields the engine did not return stay `None`; the result itself is only read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValuationSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence_color: Option<ColorToken>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_meter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rent_per_meter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yoy_change: Option<YearOverYearChange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_count: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_volume: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_on_market: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation_date: Option<String>,
}

fn number(result: &EvaluationResult, key: &str) -> Option<f64> {
    result.get(key).and_then(Value::as_f64)
}

impl ValuationSummary {
    pub fn from_result(result: &EvaluationResult, use_arabic: bool) -> Self {
        let confidence = number(result, "confidence");
        let price_range = result.get("price_range").and_then(|range| {
            let min = range.get("min").and_then(Value::as_f64);
            let max = range.get("max").and_then(Value::as_f64);
            (min.is_some() || max.is_some()).then(|| format_price_range(min, max, use_arabic))
        });
        let evaluation_date = result
            .get("evaluation_date")
            .and_then(Value::as_str)
            .map(|raw| {
                parse_display_date(raw)
                    .map(format_date)
                    .unwrap_or_else(|_| PLACEHOLDER.to_string())
            });

        Self {
            estimated_value: number(result, "estimated_value")
                .map(|value| format_currency(value, use_arabic)),
            confidence: confidence.map(|value| format_confidence(value, use_arabic)),
            confidence_color: confidence.map(|value| color_for(value, ColorCategory::Confidence)),
            price_per_meter: number(result, "price_per_meter")
                .map(|value| format_price_per_meter(value, use_arabic)),
            rent_per_meter: number(result, "rent_per_meter")
                .map(|value| format_rent_per_meter(value, use_arabic)),
            price_range,
            yoy_change: number(result, "yoy_change")
                .map(|value| format_yoy_change(value, use_arabic)),
            transaction_count: result
                .get("transaction_count")
                .and_then(Value::as_u64)
                .map(|count| format_transaction_count(count, use_arabic)),
            market_volume: number(result, "market_volume_billions")
                .map(|value| format_volume_billions(value, use_arabic)),
            days_on_market: result
                .get("days_on_market")
                .and_then(Value::as_i64)
                .map(|days| format_days(days, use_arabic)),
            evaluation_date,
        }
    }

    /// Labelled rows in display order, skipping fields the engine did not provide.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        let mut rows = Vec::new();
        let mut push = |label: &'static str, value: Option<&String>| {
            if let Some(value) = value {
                rows.push((label, value.clone()));
            }
        };

        push("القيمة التقديرية", self.estimated_value.as_ref());
        push("نسبة الثقة", self.confidence.as_ref());
        push("سعر المتر", self.price_per_meter.as_ref());
        push("إيجار المتر", self.rent_per_meter.as_ref());
        push("النطاق السعري", self.price_range.as_ref());
        push(
            "التغير السنوي",
            self.yoy_change.as_ref().map(|change| &change.text),
        );
        push("عدد الصفقات", self.transaction_count.as_ref());
        push("حجم السوق", self.market_volume.as_ref());
        push("مدة العرض", self.days_on_market.as_ref());
        push("تاريخ التقييم", self.evaluation_date.as_ref());
        rows
    }
}

impl fmt::Display for ValuationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, value) in self.rows() {
            writeln!(f, "{label}: {value}")?;
        }
        Ok(())
    }
}
