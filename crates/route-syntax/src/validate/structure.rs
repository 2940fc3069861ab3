//! Placement rules: where separators, parameters, catch-alls and optional parameters may go.

use rowan::{TextRange, TextSize};

use super::Validator;
use crate::diagnostics::DiagnosticKind;
use crate::parser::{Root, RootPart, Segment, SegmentPart};

impl Validator<'_> {
    /// `~` may only start an app-relative pattern, `~/...`.
    pub(super) fn check_start(&mut self, root: &Root) {
        let text = root.as_cst().text().to_string();
        let Some(rest) = text.strip_prefix('~') else {
            return;
        };
        if rest.starts_with('/') {
            return;
        }
        let tilde = TextRange::at(TextSize::from(0), TextSize::of('~'));
        self.report(DiagnosticKind::InvalidRouteTemplate, tilde)
            .emit();
    }

    pub(super) fn check_consecutive_separators(&mut self, root: &Root) {
        let mut previous_was_separator = false;
        for part in root.parts() {
            let is_separator = matches!(part, RootPart::Separator(_));
            if is_separator && previous_was_separator {
                self.report(
                    DiagnosticKind::CannotHaveConsecutiveSeparators,
                    part.as_cst().text_range(),
                )
                .emit();
            }
            previous_was_separator = is_separator;
        }
    }

    /// Two parameters back to back inside one segment cannot be told apart when matching.
    pub(super) fn check_consecutive_parameters(&mut self, root: &Root) {
        for segment in root.segments() {
            let parts: Vec<SegmentPart> = segment.parts().collect();
            for pair in parts.windows(2) {
                if let [SegmentPart::Parameter(_), SegmentPart::Parameter(second)] = pair {
                    self.report(
                        DiagnosticKind::CannotHaveConsecutiveParameters,
                        second.text_range(),
                    )
                    .emit();
                }
            }
        }
    }

    pub(super) fn check_catch_all_placement(&mut self, root: &Root) {
        let segments: Vec<Segment> = root.segments().collect();
        for (index, segment) in segments.iter().enumerate() {
            let is_last = index + 1 == segments.len();
            let is_complex = segment.parts().count() > 1;

            for parameter in segment.parameters().filter(|p| p.is_catch_all()) {
                if !is_last {
                    self.report(DiagnosticKind::CatchAllMustBeLast, parameter.text_range())
                        .emit();
                }
                if is_complex {
                    self.report(
                        DiagnosticKind::CannotHaveCatchAllInMultiSegment,
                        parameter.text_range(),
                    )
                    .emit();
                }
            }
        }
    }

    /// In a segment with several parts an optional parameter must come last and may only
    /// be preceded by a `.`, as in `{name}.{ext?}`.
    pub(super) fn check_optional_placement(&mut self, root: &Root) {
        for segment in root.segments() {
            let parts: Vec<SegmentPart> = segment.parts().collect();
            if parts.len() < 2 {
                continue;
            }

            for (index, part) in parts.iter().enumerate() {
                let SegmentPart::Parameter(parameter) = part else {
                    continue;
                };
                if !parameter.is_optional() {
                    continue;
                }

                let name = parameter.name_text();
                if let Some(next) = parts.get(index + 1) {
                    self.report(
                        DiagnosticKind::OptionalParameterHasToBeLast,
                        parameter.text_range(),
                    )
                    .arg(segment.text())
                    .arg(name)
                    .arg(next.text())
                    .emit();
                    continue;
                }

                let Some(previous) = index.checked_sub(1).and_then(|i| parts.get(i)) else {
                    continue;
                };
                match previous {
                    SegmentPart::OptionalSeparator(_) => {}
                    // already reported as consecutive parameters
                    SegmentPart::Parameter(_) => {}
                    SegmentPart::Literal(_) | SegmentPart::Replacement(_) => {
                        self.report(
                            DiagnosticKind::OptionalParameterCanBePrecededByPeriod,
                            parameter.text_range(),
                        )
                        .arg(segment.text())
                        .arg(name)
                        .arg(previous.text())
                        .emit();
                    }
                }
            }
        }
    }

    pub(super) fn check_replacements(&mut self, root: &Root) {
        for segment in root.segments() {
            for part in segment.parts() {
                let SegmentPart::Replacement(replacement) = part else {
                    continue;
                };
                if replacement.is_closed() && replacement.name().is_empty() {
                    self.report(
                        DiagnosticKind::EmptyReplacementToken,
                        replacement.text_range(),
                    )
                    .emit();
                }
            }
        }
    }
}
