//! Renders an ensemble result as text, with bars that show the relative size
//! of each value.

use std::fmt::Write;

use crate::models::mixer::EnsembleResult;
use crate::utils::distribution::argmax;

/// The width of the longest bar.
const BAR_WIDTH: usize = 40;

fn bar(value: f64, max: f64) -> String {
    if max <= 0.0 {
        return String::new();
    }
    let len = ((BAR_WIDTH as f64) * value / max).round() as usize;
    "#".repeat(len.min(BAR_WIDTH))
}

/// Print the values with a bar each, scaled to the highest value.
fn write_bars(out: &mut String, values: &[f64], suffix: &str) {
    let max = values.iter().cloned().fold(0.0, f64::max);
    for (i, v) in values.iter().enumerate() {
        let _ = writeln!(out, "{}) {:<40} {:6.2}{}", i, bar(*v, max), v, suffix);
    }
}

pub struct Report<'a> {
    result: &'a EnsembleResult,
    show_methods: bool,
}

impl<'a> Report<'a> {
    pub fn new(result: &'a EnsembleResult) -> Self {
        Self {
            result,
            show_methods: false,
        }
    }

    /// Include the prediction of every model.
    pub fn set_methods(&mut self, show: bool) {
        self.show_methods = show;
    }

    pub fn render(&self) -> String {
        let r = self.result;
        let mut out = String::new();

        let _ = writeln!(out, "Top predictions:");
        for (i, ranked) in r.top.iter().enumerate() {
            let _ = writeln!(
                out,
                "  #{} digit {}  {:5.1}%",
                i + 1,
                ranked.digit,
                ranked.percentage
            );
        }
        let _ = writeln!(
            out,
            "Confidence {:.1}  entropy {:.2} bits",
            r.confidence, r.entropy
        );

        let _ = writeln!(out, "\nDistribution:");
        write_bars(&mut out, &r.percentages, "%");

        let _ = writeln!(out, "\nRegime:");
        let _ = writeln!(
            out,
            "  {} change points, current regime {} steps",
            r.regime.change_points.len(),
            r.regime.current_regime
        );
        if let Some(cp) = r.regime.last_change() {
            let _ = writeln!(
                out,
                "  last change at {} (mean shift {:.2})",
                cp.index, cp.magnitude
            );
        }
        let _ = writeln!(
            out,
            "  entropy {:.3}, pattern weight {:.3}, frequency weight {:.3}",
            r.entropy_info.entropy,
            r.entropy_info.pattern_weight,
            r.entropy_info.frequency_weight
        );

        if let Some(sel) = &r.selection {
            let _ = writeln!(
                out,
                "  variable order context [{}] (order {}, confidence {:.3})",
                sel.context, sel.order, sel.confidence
            );
        }

        let (digit, p) = argmax(&r.consensus);
        let _ = writeln!(out, "  consensus favors {} ({:.3})", digit, p);

        if self.show_methods {
            let _ = writeln!(out, "\nMethods:");
            for m in r.methods.iter() {
                let (digit, p) = argmax(&m.probabilities);
                let _ = writeln!(
                    out,
                    "  {:<24} weight {:.3} (base {:.2})  best {} ({:.1}%)",
                    m.name,
                    m.weight,
                    m.base_weight,
                    digit,
                    p * 100.0
                );
            }
        }

        let stats = &r.stats;
        let _ = writeln!(out, "\nStatistics:");
        let _ = writeln!(out, "  {} digits, mean {:.2}", stats.len, stats.mean);
        let freq: Vec<f64> = stats.frequency.iter().map(|f| *f as f64).collect();
        write_bars(&mut out, &freq, "");
        out
    }
}

#[test]
fn test_bar() {
    assert_eq!(bar(1.0, 1.0).len(), BAR_WIDTH);
    assert_eq!(bar(0.5, 1.0).len(), BAR_WIDTH / 2);
    assert_eq!(bar(1.0, 0.0), "");
}
