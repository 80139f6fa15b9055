//! The OPC package layer: reading and writing the `.pptx` container.
//!
//! A `.pptx` file is an OPC package: a ZIP archive of XML parts wired
//! together by relationship files. The reader builds the deck model from an
//! archive; the writer regenerates a complete package from the model. The
//! model is the document: foreign parts that the model does not represent
//! (media, notes, animations) are not carried across a load/save cycle.

pub(crate) mod consts;
mod reader;
mod template;
mod writer;

pub(crate) use reader::read_package;
pub(crate) use writer::write_package;

#[cfg(test)]
mod tests {
    use crate::dataset::DataTable;
    use crate::presentation::{
        Bounds, Chart, ChartData, ChartKind, Key, Presentation, Shape, Table,
    };

    fn sample_deck() -> Presentation {
        let mut pres = Presentation::new();
        pres.add_slide(0).unwrap();
        pres.add_slide(2).unwrap();

        pres.assign(Key::Shape(0, 0), "Annual Report".into()).unwrap();

        let mut table = Table::new(3, 2);
        let mut data = DataTable::new(["Year", "Total"]);
        data.push_row("0", [2023, 10]).unwrap();
        data.push_row("1", [2024, 14]).unwrap();
        table.fill(&data).unwrap();

        let mut chart = Chart::new(ChartKind::Line);
        let mut chart_data = ChartData::new();
        chart_data
            .set_categories(["Q1", "Q2", "Q3"])
            .add_series("2024", vec![1.0, 2.5, 4.0]);
        chart.replace_data(chart_data);

        let slide = pres.slide_at_mut(1).unwrap();
        slide.add_text_box("overview & outlook", Bounds::new(0, 0, 914_400, 914_400));
        slide.shapes.push(Shape::with_table(
            table,
            Bounds::new(0, 914_400, 4_572_000, 1_828_800),
        ));
        slide.shapes.push(Shape::with_chart(
            chart,
            Bounds::new(0, 2_743_200, 4_572_000, 2_743_200),
        ));

        pres
    }

    #[test]
    fn round_trip_preserves_structure_and_content() {
        let original = sample_deck();
        let bytes = original.to_bytes().unwrap();
        let reloaded = Presentation::from_bytes(&bytes).unwrap();

        assert_eq!(reloaded.slide_count(), 2);
        assert_eq!(reloaded.slide_width(), original.slide_width());

        // slide 0: title placeholder text survives, placeholder tag intact
        let title = reloaded.shape_at(0, 0).unwrap();
        assert_eq!(title.text(), "Annual Report");
        assert!(title.placeholder().is_some_and(|p| p.kind.is_title()));

        // slide 1 shape order: text box, table, chart
        let slide = reloaded.slide_at(1).unwrap();
        assert_eq!(slide.shape_count(), 3);
        assert_eq!(slide.shapes()[0].text(), "overview & outlook");

        let table = slide.shapes()[1].table().expect("table survives");
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.cell(0, 0).unwrap().text(), "Year");
        assert_eq!(table.cell(2, 1).unwrap().text(), "14");

        let chart = slide.shapes()[2].chart().expect("chart survives");
        assert_eq!(chart.kind(), ChartKind::Line);
        assert_eq!(chart.categories(), ["Q1", "Q2", "Q3"]);
        assert_eq!(chart.series().len(), 1);
        assert_eq!(chart.series()[0].values(), [1.0, 2.5, 4.0]);
    }

    #[test]
    fn round_trip_preserves_layout_inventory() {
        let bytes = sample_deck().to_bytes().unwrap();
        let reloaded = Presentation::from_bytes(&bytes).unwrap();

        assert_eq!(reloaded.layouts().len(), 3);
        assert_eq!(reloaded.blank_layout().unwrap().placeholder_count(), 0);
        // bounds of a plain shape survive
        let shape = reloaded.shape_at(1, 0).unwrap();
        assert_eq!(shape.bounds(), Bounds::new(0, 0, 914_400, 914_400));
    }

    #[test]
    fn garbage_bytes_are_rejected() {
        assert!(Presentation::from_bytes(b"not a zip archive").is_err());
    }

    #[test]
    fn zip_without_presentation_part_is_rejected() {
        use std::io::Write;
        let mut zip = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
        zip.start_file("hello.txt", zip::write::FileOptions::<()>::default())
            .unwrap();
        zip.write_all(b"hi").unwrap();
        let bytes = zip.finish().unwrap().into_inner();

        assert!(Presentation::from_bytes(&bytes).is_err());
    }
}
