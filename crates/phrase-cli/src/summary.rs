use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use phrase_model::Group;
use phrase_cli::script::ScriptEvent;

pub fn print_groups(groups: &[Group]) {
    println!("{}", groups_table(groups));
}

pub fn print_events(events: &[ScriptEvent]) {
    for event in events {
        match event {
            ScriptEvent::Started { line, title } => println!("{line:>4}  {title}"),
            ScriptEvent::Committed { line } => println!("{line:>4}  confirmed"),
            ScriptEvent::Rejected { line, message } => eprintln!("{line:>4}  error: {message}"),
            ScriptEvent::Dismissed { line } => println!("{line:>4}  cancelled"),
            ScriptEvent::DeletedGroup { line, group } => {
                println!("{line:>4}  deleted group '{group}'");
            }
            ScriptEvent::DeletedVariations {
                line,
                group,
                positions,
            } => println!("{line:>4}  deleted positions {positions:?} from '{group}'"),
            ScriptEvent::Shown { groups, .. } => print_groups(groups),
        }
    }
}

pub fn groups_table(groups: &[Group]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Group"),
        header_cell("Variation"),
        header_cell("Probability"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for group in groups {
        if group.variations.is_empty() {
            table.add_row(vec![group_cell(&group.name), dim_cell("-"), dim_cell("-")]);
            continue;
        }
        for (index, variation) in group.variations.iter().enumerate() {
            let name_cell = if index == 0 {
                group_cell(&group.name)
            } else {
                Cell::new("")
            };
            table.add_row(vec![
                name_cell,
                Cell::new(&variation.name),
                Cell::new(variation.percent_label()),
            ]);
        }
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn group_cell(name: &str) -> Cell {
    Cell::new(name)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
