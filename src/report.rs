use serde::Serialize;
use tinytemplate::TinyTemplate;

use crate::{
    calculator::footprint, AnnualActivity, Assessment, CalculationInput, CalculationResult,
    Continent, EmissionFactorTable, Error,
};

static TEMPLATE: &str = include_str!("./report_template.txt");
static TEMPLATE_NAME: &'static str = "t";

/// Everything shown to a person after a calculation
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub continent: Continent,
    pub annual: AnnualActivity,
    pub result: CalculationResult,
    pub assessment: Assessment,
    /// when the report was generated
    pub date: time::Date,
}

#[derive(Serialize)]
struct Annual {
    distance: String,
    electricity: String,
    waste: String,
    meals: String,
}

#[derive(Serialize)]
struct Context {
    continent: &'static str,
    date: String,
    annual: Annual,
    transportation: String,
    electricity: String,
    diet: String,
    waste: String,
    total: String,
    assessment: &'static str,
}

/// Formats a quantity without trailing zeros (`3650` instead of `3650.00`)
fn quantity(value: f64) -> String {
    let value = format!("{value:.2}");
    value
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

fn tonnes(value: f64) -> String {
    format!("{value:.2}")
}

impl Report {
    /// Computes `input` and collects what is needed to present it.
    /// # Error
    /// Errors as [`crate::calculate`] does
    pub fn new(
        table: &EmissionFactorTable,
        input: &CalculationInput,
        date: time::Date,
    ) -> Result<Self, Error> {
        let (continent, annual, result) = footprint(table, input)?;
        Ok(Self {
            continent,
            annual,
            assessment: Assessment::of(&result),
            result,
            date,
        })
    }

    /// Renders this report as plain text
    pub fn render(&self) -> Result<String, Error> {
        let context = Context {
            continent: self.continent.name(),
            date: self.date.to_string(),
            annual: Annual {
                distance: quantity(self.annual.distance),
                electricity: quantity(self.annual.electricity),
                waste: quantity(self.annual.waste),
                meals: quantity(self.annual.meals),
            },
            transportation: tonnes(self.result.transportation),
            electricity: tonnes(self.result.electricity),
            diet: tonnes(self.result.diet),
            waste: tonnes(self.result.waste),
            total: tonnes(self.result.total),
            assessment: self.assessment.message(),
        };

        let mut tt = TinyTemplate::new();
        tt.set_default_formatter(&tinytemplate::format_unescaped);
        tt.add_template(TEMPLATE_NAME, TEMPLATE)?;

        Ok(tt.render(TEMPLATE_NAME, &context)?)
    }
}
