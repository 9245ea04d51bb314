use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use merit_engine::{cost::marginal_cost, plan::ProductionPlan, request::Scenario};
use merit_quantities::power::Megawatts;

pub fn build_plan_table(scenario: &Scenario, plan: &ProductionPlan) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table.set_header(vec!["Plant", "Kind", "Min", "Max", "Cost", "Power"]);
    for (plant, allocation) in scenario.plants.iter().zip(&plan.0) {
        let range = plant.effective_range(scenario.prices.wind);
        let power_cell = Cell::new(allocation.power).set_alignment(CellAlignment::Right);
        let power_cell = if allocation.power > Megawatts::ZERO {
            power_cell.fg(Color::Green)
        } else {
            power_cell.add_attribute(Attribute::Dim)
        };
        table.add_row(vec![
            Cell::new(&plant.name),
            Cell::new(plant.kind).add_attribute(Attribute::Dim),
            Cell::new(range.min).set_alignment(CellAlignment::Right).add_attribute(Attribute::Dim),
            Cell::new(range.max).set_alignment(CellAlignment::Right).add_attribute(Attribute::Dim),
            Cell::new(marginal_cost(plant, &scenario.prices)).set_alignment(CellAlignment::Right),
            power_cell,
        ]);
    }
    table
}
