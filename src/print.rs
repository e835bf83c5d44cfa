//! Console tabulation of experiment reports.

use stanza::style::{HAlign, Header, MinWidth, Separator, Styles};
use stanza::table::{Col, Row, Table};

use crate::experiment::Report;

pub fn tabulate_report(report: &Report) -> Table {
    let mut table = Table::default()
        .with_cols({
            let mut cols = vec![Col::new(
                Styles::default()
                    .with(Separator(true))
                    .with(MinWidth(5))
                    .with(HAlign::Centred),
            )];
            cols.push(Col::new(
                Styles::default().with(MinWidth(10)).with(HAlign::Right),
            ));
            if report.empirical.is_some() {
                cols.push(Col::new(
                    Styles::default().with(MinWidth(10)).with(HAlign::Right),
                ));
                cols.push(Col::new(
                    Styles::default().with(MinWidth(10)).with(HAlign::Right),
                ));
            }
            cols
        })
        .with_row({
            let mut header_cells = vec!["m".into(), "Analytic".into()];
            if report.empirical.is_some() {
                header_cells.push("Empirical".into());
                header_cells.push("Difference".into());
            }
            Row::new(
                Styles::default().with(Header(true)).with(Separator(true)),
                header_cells,
            )
        });

    for (index, &defectives) in report.support.iter().enumerate() {
        let analytic = report.analytic[index];
        let mut row_cells = vec![
            format!("{defectives}").into(),
            format!("{analytic:.6}").into(),
        ];
        if let Some(empirical) = &report.empirical {
            let empirical = empirical[index];
            row_cells.push(format!("{empirical:.6}").into());
            row_cells.push(format!("{:+.6}", empirical - analytic).into());
        }
        table.push_row(Row::new(Styles::default(), row_cells));
    }

    table
}
