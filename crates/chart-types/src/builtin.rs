//! Built-in chart type catalog

use serde_json::json;

use crate::definition::{ChartDefinition, ColumnClass, ColumnRequirement};
use crate::registry::ChartTypeRegistry;

/// Register the built-in chart types, default type first
pub(crate) fn install(registry: &mut ChartTypeRegistry) {
    registry.register(
        ChartDefinition::new("bar", "Bar diagram", "Bar charts")
            .with_description("Vertical bars per data group")
            .with_column(
                "x",
                ColumnRequirement::new("Labels for x-axis", ColumnClass::Label).optional(),
            )
            .with_column("y", ColumnRequirement::new("Values for y-axis", ColumnClass::Numeric))
            .with_setting("show_legend", true)
            .with_setting("y_axis_label", ""),
    );

    registry.register(
        ChartDefinition::new("line", "Line chart", "Line charts")
            .with_description("Connected values over an ordered axis")
            .with_column(
                "x",
                ColumnRequirement::new("Labels for x-axis", ColumnClass::Label).optional(),
            )
            .with_column("y", ColumnRequirement::new("Values for y-axis", ColumnClass::Numeric))
            .with_setting("show_points", false)
            .with_setting("show_legend", true),
    );

    registry.register(
        ChartDefinition::new("scatter", "Scatter plot", "Point charts")
            .with_description("One point per row, both axes numeric")
            .with_column("x", ColumnRequirement::new("Values for x-axis", ColumnClass::Numeric))
            .with_column("y", ColumnRequirement::new("Values for y-axis", ColumnClass::Numeric))
            .with_setting("point_size", 3),
    );

    registry.register(
        ChartDefinition::new("stacked_area", "Stacked area", "Area charts")
            .with_description("Group values stacked over an ordered axis")
            .with_column(
                "x",
                ColumnRequirement::new("Labels for x-axis", ColumnClass::Label).optional(),
            )
            .with_column("y", ColumnRequirement::new("Values for y-axis", ColumnClass::Numeric))
            .with_setting("normalized", false),
    );

    registry.register(
        ChartDefinition::new("pie", "Pie chart", "Proportional charts")
            .with_description("One slice per row of the bound columns")
            .with_column("label", ColumnRequirement::new("Labels", ColumnClass::Label))
            .with_column("y", ColumnRequirement::new("Values", ColumnClass::Numeric))
            .with_setting("donut", false)
            .with_setting("show_percentages", true),
    );

    registry.register(
        ChartDefinition::new("histogram", "Histogram", "Distribution charts")
            .with_description("Binned frequency of a numeric column")
            .with_column("y", ColumnRequirement::new("Observations", ColumnClass::Numeric))
            .with_setting("bins", 20),
    );

    registry.register(
        ChartDefinition::new("box_plot", "Box plot", "Distribution charts")
            .with_description("Quartile summary per data group")
            .with_column("y", ColumnRequirement::new("Observations", ColumnClass::Numeric)),
    );

    registry.register(
        ChartDefinition::new("heatmap", "Heatmap", "Matrix charts")
            .with_description("Colored cells over two label axes")
            .with_column("x", ColumnRequirement::new("Column labels", ColumnClass::Label))
            .with_column("y", ColumnRequirement::new("Row labels", ColumnClass::Label))
            .with_column("z", ColumnRequirement::new("Observation values", ColumnClass::Numeric))
            .with_setting("color_scale", json!("viridis")),
    );
}
