//! Reporte nutricional tabular sobre todos los menús almacenados.

use gofit_domain::DailyMenu;

use crate::constants::DATE_FORMAT;

pub trait ReportGenerator: Send + Sync {
    /// Una fila por menú: fecha, usuario y totales de macros del día.
    fn render(&self, menus: &[DailyMenu]) -> String;
}

/// Tabla de texto de ancho fijo, calculado sobre el contenido.
pub struct TableReport;

const HEADERS: [&str; 6] = ["Date", "User", "Calories", "Proteins", "Carbohydrates", "Lipids"];

impl ReportGenerator for TableReport {
    fn render(&self, menus: &[DailyMenu]) -> String {
        let rows: Vec<[String; 6]> = menus.iter()
                                          .map(|menu| {
                                              let (cal, prot, carb, lipid) = menu.macro_summary();
                                              [menu.date.format(DATE_FORMAT).to_string(),
                                               menu.user.label(),
                                               format!("{cal:.1}"),
                                               format!("{prot:.1}"),
                                               format!("{carb:.1}"),
                                               format!("{lipid:.1}")]
                                          })
                                          .collect();

        let mut widths: [usize; 6] = HEADERS.map(str::len);
        for row in &rows {
            for (w, cell) in widths.iter_mut().zip(row.iter()) {
                *w = (*w).max(cell.len());
            }
        }

        let mut out = String::new();
        render_row(&mut out, &HEADERS.map(str::to_string), &widths);
        render_separator(&mut out, &widths);
        for row in &rows {
            render_row(&mut out, row, &widths);
        }
        out
    }
}

fn render_row(out: &mut String, cells: &[String; 6], widths: &[usize; 6]) {
    for (i, (cell, width)) in cells.iter().zip(widths.iter()).enumerate() {
        if i > 0 {
            out.push_str(" | ");
        }
        out.push_str(&format!("{cell:<width$}"));
    }
    out.push('\n');
}

fn render_separator(out: &mut String, widths: &[usize; 6]) {
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            out.push_str("-+-");
        }
        out.push_str(&"-".repeat(*width));
    }
    out.push('\n');
}
