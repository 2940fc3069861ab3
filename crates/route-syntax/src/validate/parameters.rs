//! Per-parameter checks and the parameter table.

use super::Validator;
use crate::diagnostics::DiagnosticKind;
use crate::parameters::RouteParameter;
use crate::parser::{Parameter, Root};

impl Validator<'_> {
    /// Builds a [`RouteParameter`] for every parameter in document order. The first
    /// definition of a name wins; later ones are reported as repeated.
    pub(super) fn collect_parameters(&mut self, root: &Root) {
        for parameter in root.parameters() {
            self.check_parameter(&parameter);

            let route_parameter = self.route_parameter(&parameter);
            if route_parameter.name.is_empty() {
                continue;
            }
            let name = route_parameter.name.clone();
            if !self.parameters.insert(route_parameter) {
                self.report(DiagnosticKind::RepeatedParameter, parameter.text_range())
                    .arg(name)
                    .emit();
            }
        }
    }

    fn check_parameter(&mut self, parameter: &Parameter) {
        let range = parameter.text_range();

        if parameter.name_text().is_empty() {
            self.report(DiagnosticKind::InvalidParameterName, range)
                .arg("")
                .emit();
        }

        if parameter.is_optional() && parameter.default_value().is_some() {
            self.report(DiagnosticKind::OptionalCannotHaveDefaultValue, range)
                .emit();
        }

        if parameter.is_catch_all() && parameter.is_optional() {
            self.report(DiagnosticKind::CatchAllCannotBeOptional, range)
                .emit();
        }
    }

    fn route_parameter(&self, parameter: &Parameter) -> RouteParameter {
        let catch_all = parameter.catch_all();
        RouteParameter {
            name: parameter.name_text(),
            encode_slashes: !catch_all.as_ref().is_some_and(|c| c.is_unescaped()),
            default_value: parameter.default_value().map(|d| d.value()),
            is_optional: parameter.is_optional(),
            is_catch_all: catch_all.is_some(),
            policies: parameter.policies().map(|p| p.value()).collect(),
            range: self.text.text_to_source(parameter.text_range()),
        }
    }
}
