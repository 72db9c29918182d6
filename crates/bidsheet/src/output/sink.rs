//! Cell planning and the sink contract.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::reconcile::CanonicalGroup;

use super::layout::SheetLayout;

/// A scalar cell value, or an explicit blank.
///
/// Blank is a real write: it marks "no price from this vendor" in a
/// cell the layout assigns, as opposed to cells the plan never touches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Blank,
}

/// One positioned cell write. `row` is the 1-based sheet row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellWrite {
    pub row: u32,
    pub column: String,
    pub value: CellValue,
}

/// Anything that can persist a planned comparison sheet.
pub trait ComparisonSink {
    /// Apply one cell write.
    fn write_cell(&mut self, write: &CellWrite) -> Result<()>;

    /// Flush and persist everything written so far.
    fn finish(&mut self) -> Result<()>;
}

/// Plan the cell writes for a reconciled comparison.
///
/// Row numbers advance by one per group from `data_start_row`, in group
/// order. Each row gets its description, its quantity, and one price
/// cell per configured vendor column; a missing price is an explicit
/// [`CellValue::Blank`]. Price slots beyond the configured vendor
/// count, and configured vendors beyond the document count, are
/// silently skipped.
pub fn plan_writes(groups: &[CanonicalGroup], layout: &SheetLayout) -> Vec<CellWrite> {
    let mut writes = Vec::new();

    for (index, group) in groups.iter().enumerate() {
        let row = layout.data_start_row + index as u32;

        writes.push(CellWrite {
            row,
            column: layout.description_column.clone(),
            value: CellValue::Text(group.description.clone()),
        });

        writes.push(CellWrite {
            row,
            column: layout.quantity_column.clone(),
            value: match group.quantity {
                Some(q) => CellValue::Number(q),
                None => CellValue::Blank,
            },
        });

        for (slot, column) in layout.vendor_columns.values().enumerate() {
            if slot >= group.prices.len() {
                break;
            }
            writes.push(CellWrite {
                row,
                column: column.clone(),
                value: match group.prices[slot] {
                    Some(p) => CellValue::Number(p),
                    None => CellValue::Blank,
                },
            });
        }
    }

    writes
}

/// Plan and apply a whole comparison to a sink, then finish it.
pub fn write_comparison(
    sink: &mut dyn ComparisonSink,
    groups: &[CanonicalGroup],
    layout: &SheetLayout,
) -> Result<()> {
    for write in plan_writes(groups, layout) {
        sink.write_cell(&write)?;
    }
    sink.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(index: usize, desc: &str, qty: Option<f64>, prices: Vec<Option<f64>>) -> CanonicalGroup {
        CanonicalGroup {
            baseline_index: index,
            description: desc.to_string(),
            quantity: qty,
            unit_of_measure: "EA".to_string(),
            prices,
        }
    }

    #[test]
    fn rows_advance_from_start_row_in_group_order() {
        let layout = SheetLayout::default();
        let groups = vec![
            group(0, "Widget", Some(2.0), vec![Some(1.0)]),
            group(1, "Gadget", None, vec![None]),
        ];
        let writes = plan_writes(&groups, &layout);

        let widget_rows: Vec<u32> = writes
            .iter()
            .filter(|w| matches!(&w.value, CellValue::Text(t) if t == "Widget"))
            .map(|w| w.row)
            .collect();
        let gadget_rows: Vec<u32> = writes
            .iter()
            .filter(|w| matches!(&w.value, CellValue::Text(t) if t == "Gadget"))
            .map(|w| w.row)
            .collect();
        assert_eq!(widget_rows, [7]);
        assert_eq!(gadget_rows, [8]);
    }

    #[test]
    fn absent_prices_are_explicit_blanks() {
        let layout = SheetLayout::default();
        let groups = vec![group(0, "Widget", Some(2.0), vec![Some(1.0), None])];
        let writes = plan_writes(&groups, &layout);

        // Slot 0 -> column I, slot 1 -> column L.
        let slot0 = writes.iter().find(|w| w.column == "I").unwrap();
        assert_eq!(slot0.value, CellValue::Number(1.0));
        let slot1 = writes.iter().find(|w| w.column == "L").unwrap();
        assert_eq!(slot1.value, CellValue::Blank);
    }

    #[test]
    fn price_slots_beyond_configured_vendors_are_ignored() {
        let layout = SheetLayout::default(); // three vendor columns
        let groups = vec![group(
            0,
            "Widget",
            None,
            vec![Some(1.0), Some(2.0), Some(3.0), Some(4.0), Some(5.0)],
        )];
        let writes = plan_writes(&groups, &layout);
        let price_writes = writes
            .iter()
            .filter(|w| ["I", "L", "N"].contains(&w.column.as_str()))
            .count();
        assert_eq!(price_writes, 3);
    }

    #[test]
    fn configured_vendors_beyond_document_count_are_skipped() {
        let layout = SheetLayout::default(); // three vendor columns
        let groups = vec![group(0, "Widget", None, vec![Some(1.0)])];
        let writes = plan_writes(&groups, &layout);
        assert!(writes.iter().any(|w| w.column == "I"));
        assert!(!writes.iter().any(|w| w.column == "L"));
        assert!(!writes.iter().any(|w| w.column == "N"));
    }

    #[test]
    fn empty_groups_plan_nothing() {
        let layout = SheetLayout::default();
        assert!(plan_writes(&[], &layout).is_empty());
    }
}
