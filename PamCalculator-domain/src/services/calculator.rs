use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

use crate::clock::Clock;
use crate::entities::pressure::{FormMessage, MapResult, MessageTone, PressureForm};
use crate::entities::syrup::SyrupAdvisory;
use crate::services::date_parity::{day_of_year, syrup_advisory};
use crate::services::map_classifier::evaluate;

/// State of one calculator form.
///
/// The syrup advisory is fixed when the calculator is built and survives `clear`.
#[derive(Debug, Clone)]
pub struct Calculator {
    form: PressureForm,
    result: Option<MapResult>,
    message: Option<FormMessage>,
    syrup: SyrupAdvisory,
    syrup_date: NaiveDate,
}

/// Message area as shown to the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct MessageView {
    /// Display text
    pub text: String,

    /// Machine-readable message tag, e.g. `MISSING_INPUT` or `BASE_DOSE_ONLY`
    pub kind: String,

    /// Visual weight of the message
    pub tone: MessageTone,
}

/// Syrup box as shown to the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct SyrupView {
    /// Display text
    pub text: String,

    /// Parity advisory tag
    pub advisory: SyrupAdvisory,

    /// Date the advisory was evaluated on
    pub date: NaiveDate,

    /// Ordinal day of `date` within its year
    pub day_of_year: u32,
}

/// Snapshot of the whole widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct CalculatorView {
    /// Current systolic input text
    pub systolic: String,

    /// Current diastolic input text
    pub diastolic: String,

    /// Computed PAM with one decimal, absent unless the last calculation succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pam: Option<String>,

    /// Message area, absent after a reset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<MessageView>,

    /// Day-parity syrup advisory, always present
    pub syrup: SyrupView,
}

impl Calculator {
    /// Build a calculator, reading the clock once for the syrup advisory
    pub fn new(clock: &dyn Clock) -> Self {
        let today = clock.today();
        let syrup = syrup_advisory(today);
        debug!(date = %today, advisory = ?syrup, "Syrup advisory evaluated");

        Self {
            form: PressureForm::default(),
            result: None,
            message: None,
            syrup,
            syrup_date: today,
        }
    }

    pub fn set_systolic(&mut self, text: impl Into<String>) {
        self.form.systolic = text.into();
    }

    pub fn set_diastolic(&mut self, text: impl Into<String>) {
        self.form.diastolic = text.into();
    }

    /// Replace both inputs at once
    pub fn set_form(&mut self, form: PressureForm) {
        self.form = form;
    }

    /// Evaluate the current inputs and store the outcome
    pub fn calculate(&mut self) -> CalculatorView {
        match evaluate(&self.form) {
            Ok(result) => {
                debug!(pam = result.pam, advisory = ?result.advisory, "PAM calculated");
                self.message = Some(FormMessage::Advisory(result.advisory));
                self.result = Some(result);
            }
            Err(err) => {
                debug!(error = %err, "PAM calculation rejected");
                self.message = Some(err.message());
                self.result = None;
            }
        }
        self.view()
    }

    /// Reset inputs, result and message. The syrup advisory is kept.
    pub fn clear(&mut self) -> CalculatorView {
        debug!("Calculator cleared");
        self.form = PressureForm::default();
        self.result = None;
        self.message = None;
        self.view()
    }

    pub fn form(&self) -> &PressureForm {
        &self.form
    }

    pub fn result(&self) -> Option<&MapResult> {
        self.result.as_ref()
    }

    pub fn message(&self) -> Option<FormMessage> {
        self.message
    }

    pub fn syrup(&self) -> SyrupAdvisory {
        self.syrup
    }

    pub fn view(&self) -> CalculatorView {
        CalculatorView {
            systolic: self.form.systolic.clone(),
            diastolic: self.form.diastolic.clone(),
            pam: self.result.as_ref().map(MapResult::formatted),
            message: self.message.map(|message| MessageView {
                text: message.text().to_string(),
                kind: message.kind().to_string(),
                tone: message.tone(),
            }),
            syrup: SyrupView {
                text: self.syrup.text().to_string(),
                advisory: self.syrup,
                date: self.syrup_date,
                day_of_year: day_of_year(self.syrup_date),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::entities::pressure::AdvisoryMessage;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn calculator_on(year: i32, month: u32, day: u32) -> Calculator {
        Calculator::new(&FixedClock::from_ymd(year, month, day).unwrap())
    }

    #[derive(Debug, Default)]
    struct CountingClock {
        reads: AtomicU32,
    }

    impl Clock for CountingClock {
        fn today(&self) -> NaiveDate {
            self.reads.fetch_add(1, Ordering::SeqCst);
            NaiveDate::from_ymd_opt(2025, 1, 2).unwrap()
        }
    }

    #[test]
    fn test_calculate_success() {
        let mut calculator = calculator_on(2025, 1, 1);
        calculator.set_systolic("120");
        calculator.set_diastolic("80");

        let view = calculator.calculate();

        assert_eq!(view.pam.as_deref(), Some("93.3"));
        let message = view.message.unwrap();
        assert_eq!(message.kind, "ADD_HALF_FUROSEMIDE");
        assert_eq!(message.text, "Añadir media pastilla de Furosemida 40mg");
        assert_eq!(message.tone, MessageTone::Info);
        assert_eq!(
            calculator.message(),
            Some(FormMessage::Advisory(AdvisoryMessage::AddHalfFurosemide))
        );
    }

    #[test]
    fn test_calculate_missing_input() {
        let mut calculator = calculator_on(2025, 1, 1);
        calculator.set_diastolic("80");

        let view = calculator.calculate();

        assert!(view.pam.is_none());
        assert_eq!(view.message.unwrap().text, "Ingrese los valores de presión");
    }

    #[test]
    fn test_calculate_invalid_range() {
        let mut calculator = calculator_on(2025, 1, 1);
        calculator.set_form(PressureForm::new("80", "100"));

        let view = calculator.calculate();

        assert!(view.pam.is_none());
        let message = view.message.unwrap();
        assert_eq!(message.kind, "INVALID_RANGE");
        assert_eq!(message.tone, MessageTone::Alert);
    }

    #[test]
    fn test_failed_calculation_discards_previous_result() {
        let mut calculator = calculator_on(2025, 1, 1);
        calculator.set_form(PressureForm::new("120", "80"));
        assert!(calculator.calculate().pam.is_some());

        calculator.set_systolic("70");
        let view = calculator.calculate();

        assert!(view.pam.is_none());
        assert!(calculator.result().is_none());
        assert_eq!(calculator.message(), Some(FormMessage::InvalidRange));
    }

    #[test]
    fn test_input_change_keeps_result_until_next_calculation() {
        let mut calculator = calculator_on(2025, 1, 1);
        calculator.set_form(PressureForm::new("120", "80"));
        calculator.calculate();

        calculator.set_systolic("");

        assert_eq!(calculator.view().pam.as_deref(), Some("93.3"));
    }

    #[test]
    fn test_clear_keeps_syrup_advisory() {
        let mut calculator = calculator_on(2025, 1, 2);
        calculator.set_form(PressureForm::new("120", "80"));
        let before = calculator.calculate();

        let after = calculator.clear();

        assert_eq!(after.systolic, "");
        assert_eq!(after.diastolic, "");
        assert!(after.pam.is_none());
        assert!(after.message.is_none());
        assert_eq!(after.syrup, before.syrup);
        assert_eq!(after.syrup.advisory, SyrupAdvisory::TakeSyrup);
        assert!(calculator.form().is_empty());
    }

    #[test]
    fn test_syrup_view_on_first_day() {
        let view = calculator_on(2025, 1, 1).view();
        assert_eq!(view.syrup.advisory, SyrupAdvisory::NoSyrup);
        assert_eq!(view.syrup.day_of_year, 1);
        assert_eq!(view.syrup.text, "Hoy no se debe tomar el jarabe (día impar)");
    }

    #[test]
    fn test_clock_read_once() {
        let clock = CountingClock::default();
        let mut calculator = Calculator::new(&clock);

        calculator.set_form(PressureForm::new("120", "80"));
        calculator.calculate();
        calculator.clear();
        calculator.view();

        assert_eq!(clock.reads.load(Ordering::SeqCst), 1);
        assert_eq!(calculator.syrup(), SyrupAdvisory::TakeSyrup);
    }

    #[test]
    fn test_view_serialization_omits_empty_fields() {
        let view = calculator_on(2025, 1, 1).view();
        let json = serde_json::to_value(&view).unwrap();

        assert!(json.get("pam").is_none());
        assert!(json.get("message").is_none());
        assert_eq!(json["syrup"]["advisory"], "NO_SYRUP");
        assert_eq!(json["syrup"]["date"], "2025-01-01");
    }
}
