//! Package writer: regenerates a complete `.pptx` archive from the model.
//!
//! Every part is generated from the model on each save: content types,
//! package relationships, document properties, the presentation part, one
//! master with the deck's layouts and theme, the slides, and one chart part
//! per chart shape.

use std::fmt::Write as FmtWrite;
use std::io::{Cursor, Write};

use zip::ZipWriter;
use zip::write::FileOptions;

use crate::common::escape_xml;
use crate::dataset::fmt_number;
use crate::error::Result;
use crate::pkg::consts::{content_type as ct, ns, rel_type as rt};
use crate::pkg::template;
use crate::presentation::{
    Chart, ChartKind, Presentation, Shape, Slide, SlideLayout, Table, TextFrame,
};

/// Serialize a presentation into `.pptx` bytes.
pub(crate) fn write_package(pres: &Presentation) -> Result<Vec<u8>> {
    // part name -> payload, in archive order
    let mut parts: Vec<(String, String)> = Vec::new();

    // a package always carries at least one layout for slides to hang off
    let fallback;
    let layouts: &[SlideLayout] = if pres.layouts().is_empty() {
        fallback = [SlideLayout::new("Blank", Vec::new())];
        &fallback
    } else {
        pres.layouts()
    };

    // slides and their chart parts, numbered across the whole deck
    let mut charts: Vec<&Chart> = Vec::new();
    let mut slide_parts: Vec<(String, String)> = Vec::new();
    for (i, slide) in pres.slides().iter().enumerate() {
        let slide_charts: Vec<&Chart> = slide
            .shapes()
            .iter()
            .filter(|s| s.table().is_none())
            .filter_map(Shape::chart)
            .collect();
        let first_chart_no = charts.len() + 1;
        charts.extend(&slide_charts);

        let layout_no = layout_number(slide, layouts.len());
        slide_parts.push((
            format!("ppt/slides/slide{}.xml", i + 1),
            slide_xml(slide)?,
        ));
        parts.push((
            format!("ppt/slides/_rels/slide{}.xml.rels", i + 1),
            slide_rels_xml(layout_no, first_chart_no, slide_charts.len()),
        ));
    }

    parts.push((
        "[Content_Types].xml".to_string(),
        content_types_xml(pres.slide_count(), layouts.len(), charts.len()),
    ));
    parts.push(("_rels/.rels".to_string(), package_rels_xml()));
    parts.push(("docProps/core.xml".to_string(), core_props_xml()));
    parts.push((
        "docProps/app.xml".to_string(),
        app_props_xml(pres.slide_count()),
    ));
    parts.push(("ppt/presentation.xml".to_string(), presentation_xml(pres)?));
    parts.push((
        "ppt/_rels/presentation.xml.rels".to_string(),
        presentation_rels_xml(pres.slide_count()),
    ));
    parts.push((
        "ppt/slideMasters/slideMaster1.xml".to_string(),
        master_xml(layouts.len())?,
    ));
    parts.push((
        "ppt/slideMasters/_rels/slideMaster1.xml.rels".to_string(),
        master_rels_xml(layouts.len()),
    ));
    for (i, layout) in layouts.iter().enumerate() {
        parts.push((
            format!("ppt/slideLayouts/slideLayout{}.xml", i + 1),
            layout_xml(layout)?,
        ));
        parts.push((
            format!("ppt/slideLayouts/_rels/slideLayout{}.xml.rels", i + 1),
            layout_rels_xml(),
        ));
    }
    parts.push(("ppt/theme/theme1.xml".to_string(), template::theme_xml()));
    parts.append(&mut slide_parts);
    for (no, chart) in charts.iter().enumerate() {
        parts.push((
            format!("ppt/charts/chart{}.xml", no + 1),
            chart_xml(chart)?,
        ));
    }

    // assemble the ZIP container
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options =
        FileOptions::<()>::default().compression_method(zip::CompressionMethod::Deflated);
    for (name, payload) in &parts {
        zip.start_file(name.as_str(), options)?;
        zip.write_all(payload.as_bytes())?;
    }
    Ok(zip.finish()?.into_inner())
}

/// 1-based layout part number a slide's relationships point at.
fn layout_number(slide: &Slide, layout_count: usize) -> usize {
    slide
        .layout_index
        .unwrap_or(0)
        .min(layout_count.saturating_sub(1))
        + 1
}

// ---------------------------------------------------------------------------
// Package plumbing parts

fn content_types_xml(slide_count: usize, layout_count: usize, chart_count: usize) -> String {
    let mut xml = String::with_capacity(2048);
    xml.push_str(template::XML_DECL);
    xml.push('\n');
    xml.push_str(
        r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
    );
    xml.push('\n');

    for (ext, content_type) in [("rels", ct::OPC_RELATIONSHIPS), ("xml", ct::XML)] {
        let _ = writeln!(
            xml,
            r#"  <Default Extension="{ext}" ContentType="{content_type}"/>"#
        );
    }

    let mut overrides: Vec<(String, &str)> = vec![
        ("/ppt/presentation.xml".to_string(), ct::PML_PRESENTATION_MAIN),
        (
            "/ppt/slideMasters/slideMaster1.xml".to_string(),
            ct::PML_SLIDE_MASTER,
        ),
        ("/ppt/theme/theme1.xml".to_string(), ct::OFC_THEME),
        ("/docProps/core.xml".to_string(), ct::OPC_CORE_PROPERTIES),
        ("/docProps/app.xml".to_string(), ct::OFC_EXTENDED_PROPERTIES),
    ];
    for i in 1..=slide_count {
        overrides.push((format!("/ppt/slides/slide{i}.xml"), ct::PML_SLIDE));
    }
    for i in 1..=layout_count {
        overrides.push((
            format!("/ppt/slideLayouts/slideLayout{i}.xml"),
            ct::PML_SLIDE_LAYOUT,
        ));
    }
    for i in 1..=chart_count {
        overrides.push((format!("/ppt/charts/chart{i}.xml"), ct::DML_CHART));
    }
    overrides.sort();

    for (partname, content_type) in overrides {
        let _ = writeln!(
            xml,
            r#"  <Override PartName="{partname}" ContentType="{content_type}"/>"#
        );
    }

    xml.push_str("</Types>");
    xml
}

/// Render a relationships part from (rId, type, target) triples.
fn rels_xml(rels: &[(String, &str, String)]) -> String {
    let mut xml = String::with_capacity(1024);
    xml.push_str(template::XML_DECL);
    xml.push('\n');
    xml.push_str(
        r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    );
    xml.push('\n');
    for (r_id, rel_type, target) in rels {
        let _ = writeln!(
            xml,
            r#"  <Relationship Id="{}" Type="{}" Target="{}"/>"#,
            escape_xml(r_id),
            escape_xml(rel_type),
            escape_xml(target)
        );
    }
    xml.push_str("</Relationships>");
    xml
}

fn package_rels_xml() -> String {
    rels_xml(&[
        (
            "rId1".to_string(),
            rt::OFFICE_DOCUMENT,
            "ppt/presentation.xml".to_string(),
        ),
        (
            "rId2".to_string(),
            rt::CORE_PROPERTIES,
            "docProps/core.xml".to_string(),
        ),
        (
            "rId3".to_string(),
            rt::EXTENDED_PROPERTIES,
            "docProps/app.xml".to_string(),
        ),
    ])
}

fn core_props_xml() -> String {
    let now = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
    let mut xml = String::with_capacity(768);
    xml.push_str(template::XML_DECL);
    xml.push_str(concat!(
        r#"<cp:coreProperties "#,
        r#"xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
        r#"xmlns:dc="http://purl.org/dc/elements/1.1/" "#,
        r#"xmlns:dcterms="http://purl.org/dc/terms/" "#,
        r#"xmlns:dcmitype="http://purl.org/dc/dcmitype/" "#,
        r#"xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
    ));
    xml.push_str("<dc:creator>pitaya</dc:creator>");
    xml.push_str("<cp:lastModifiedBy>pitaya</cp:lastModifiedBy>");
    let _ = write!(
        xml,
        r#"<dcterms:created xsi:type="dcterms:W3CDTF">{now}</dcterms:created>"#
    );
    let _ = write!(
        xml,
        r#"<dcterms:modified xsi:type="dcterms:W3CDTF">{now}</dcterms:modified>"#
    );
    xml.push_str("</cp:coreProperties>");
    xml
}

fn app_props_xml(slide_count: usize) -> String {
    let mut xml = String::with_capacity(512);
    xml.push_str(template::XML_DECL);
    xml.push_str(concat!(
        r#"<Properties "#,
        r#"xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" "#,
        r#"xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#,
    ));
    xml.push_str("<Application>pitaya</Application>");
    let _ = write!(xml, "<Slides>{slide_count}</Slides>");
    xml.push_str("</Properties>");
    xml
}

// ---------------------------------------------------------------------------
// Presentation, master, and layout parts

fn presentation_xml(pres: &Presentation) -> Result<String> {
    let mut xml = String::with_capacity(2048);
    xml.push_str(template::XML_DECL);
    write!(
        xml,
        r#"<p:presentation xmlns:p="{}" xmlns:r="{}">"#,
        ns::PML,
        ns::REL
    )?;

    xml.push_str("<p:sldMasterIdLst>");
    xml.push_str(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#);
    xml.push_str("</p:sldMasterIdLst>");

    if pres.slide_count() > 0 {
        xml.push_str("<p:sldIdLst>");
        for i in 0..pres.slide_count() {
            write!(xml, r#"<p:sldId id="{}" r:id="rId{}"/>"#, 256 + i, i + 2)?;
        }
        xml.push_str("</p:sldIdLst>");
    }

    write!(
        xml,
        r#"<p:sldSz cx="{}" cy="{}"/>"#,
        pres.slide_width(),
        pres.slide_height()
    )?;
    xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
    xml.push_str("</p:presentation>");
    Ok(xml)
}

fn presentation_rels_xml(slide_count: usize) -> String {
    let mut rels = vec![(
        "rId1".to_string(),
        rt::SLIDE_MASTER,
        "slideMasters/slideMaster1.xml".to_string(),
    )];
    for i in 0..slide_count {
        rels.push((
            format!("rId{}", i + 2),
            rt::SLIDE,
            format!("slides/slide{}.xml", i + 1),
        ));
    }
    rels_xml(&rels)
}

fn master_xml(layout_count: usize) -> Result<String> {
    let mut xml = String::with_capacity(1024);
    xml.push_str(template::XML_DECL);
    write!(
        xml,
        r#"<p:sldMaster xmlns:p="{}" xmlns:a="{}" xmlns:r="{}">"#,
        ns::PML,
        ns::DML,
        ns::REL
    )?;
    xml.push_str("<p:cSld><p:spTree>");
    xml.push_str(template::SP_TREE_HEADER);
    xml.push_str("</p:spTree></p:cSld>");
    xml.push_str(template::CLR_MAP);
    xml.push_str("<p:sldLayoutIdLst>");
    for i in 0..layout_count {
        write!(
            xml,
            r#"<p:sldLayoutId id="{}" r:id="rId{}"/>"#,
            2_147_483_649u64 + i as u64,
            i + 1
        )?;
    }
    xml.push_str("</p:sldLayoutIdLst>");
    xml.push_str("</p:sldMaster>");
    Ok(xml)
}

fn master_rels_xml(layout_count: usize) -> String {
    let mut rels = Vec::new();
    for i in 0..layout_count {
        rels.push((
            format!("rId{}", i + 1),
            rt::SLIDE_LAYOUT,
            format!("../slideLayouts/slideLayout{}.xml", i + 1),
        ));
    }
    rels.push((
        format!("rId{}", layout_count + 1),
        rt::THEME,
        "../theme/theme1.xml".to_string(),
    ));
    rels_xml(&rels)
}

fn layout_xml(layout: &SlideLayout) -> Result<String> {
    let mut xml = String::with_capacity(2048);
    xml.push_str(template::XML_DECL);
    write!(
        xml,
        r#"<p:sldLayout xmlns:p="{}" xmlns:a="{}" xmlns:r="{}" showMasterSp="1">"#,
        ns::PML,
        ns::DML,
        ns::REL
    )?;
    write!(xml, r#"<p:cSld name="{}">"#, escape_xml(layout.name()))?;
    xml.push_str("<p:spTree>");
    xml.push_str(template::SP_TREE_HEADER);
    for (i, shape) in layout.placeholders().iter().enumerate() {
        write_sp(&mut xml, shape, (i + 2) as u32)?;
    }
    xml.push_str("</p:spTree></p:cSld>");
    xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
    xml.push_str("</p:sldLayout>");
    Ok(xml)
}

fn layout_rels_xml() -> String {
    rels_xml(&[(
        "rId1".to_string(),
        rt::SLIDE_MASTER,
        "../slideMasters/slideMaster1.xml".to_string(),
    )])
}

// ---------------------------------------------------------------------------
// Slide parts

fn slide_xml(slide: &Slide) -> Result<String> {
    let mut xml = String::with_capacity(4096);
    xml.push_str(template::XML_DECL);
    write!(
        xml,
        r#"<p:sld xmlns:p="{}" xmlns:a="{}" xmlns:r="{}">"#,
        ns::PML,
        ns::DML,
        ns::REL
    )?;
    xml.push_str("<p:cSld><p:spTree>");
    xml.push_str(template::SP_TREE_HEADER);

    let mut chart_rel_no = 2u32; // rId1 is the layout
    for (i, shape) in slide.shapes().iter().enumerate() {
        let shape_id = (i + 2) as u32;
        if let Some(table) = shape.table() {
            write_table_frame(&mut xml, shape, table, shape_id)?;
        } else if shape.chart().is_some() {
            write_chart_frame(&mut xml, shape, shape_id, chart_rel_no)?;
            chart_rel_no += 1;
        } else {
            write_sp(&mut xml, shape, shape_id)?;
        }
    }

    xml.push_str("</p:spTree></p:cSld>");
    xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
    xml.push_str("</p:sld>");
    Ok(xml)
}

fn slide_rels_xml(layout_no: usize, first_chart_no: usize, chart_count: usize) -> String {
    let mut rels = vec![(
        "rId1".to_string(),
        rt::SLIDE_LAYOUT,
        format!("../slideLayouts/slideLayout{layout_no}.xml"),
    )];
    for k in 0..chart_count {
        rels.push((
            format!("rId{}", k + 2),
            rt::CHART,
            format!("../charts/chart{}.xml", first_chart_no + k),
        ));
    }
    rels_xml(&rels)
}

/// Write a plain shape (`p:sp`): geometry, optional placeholder tag,
/// optional text body.
fn write_sp(xml: &mut String, shape: &Shape, shape_id: u32) -> Result<()> {
    let name = if shape.name().is_empty() {
        format!("Shape {shape_id}")
    } else {
        shape.name().to_string()
    };

    xml.push_str("<p:sp>");
    xml.push_str("<p:nvSpPr>");
    write!(
        xml,
        r#"<p:cNvPr id="{}" name="{}"/>"#,
        shape_id,
        escape_xml(&name)
    )?;
    if shape.placeholder().is_some() {
        xml.push_str(r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>"#);
    } else {
        xml.push_str(r#"<p:cNvSpPr txBox="1"/>"#);
    }
    xml.push_str("<p:nvPr>");
    if let Some(ph) = shape.placeholder() {
        xml.push_str("<p:ph");
        if let Some(kind) = ph.kind.as_attr() {
            write!(xml, r#" type="{kind}""#)?;
        }
        if ph.idx != 0 {
            write!(xml, r#" idx="{}""#, ph.idx)?;
        }
        xml.push_str("/>");
    }
    xml.push_str("</p:nvPr>");
    xml.push_str("</p:nvSpPr>");

    xml.push_str("<p:spPr>");
    write_xfrm(xml, shape, "a")?;
    xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
    xml.push_str("</p:spPr>");

    if let Some(frame) = shape.text_frame() {
        write_text_body(xml, frame, "p")?;
    }

    xml.push_str("</p:sp>");
    Ok(())
}

/// Write the `xfrm` transform of a shape. Plain shapes use the DrawingML
/// prefix, graphic frames the PresentationML one.
fn write_xfrm(xml: &mut String, shape: &Shape, prefix: &str) -> Result<()> {
    let bounds = shape.bounds();
    write!(xml, "<{prefix}:xfrm>")?;
    write!(xml, r#"<a:off x="{}" y="{}"/>"#, bounds.left, bounds.top)?;
    write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, bounds.width, bounds.height)?;
    write!(xml, "</{prefix}:xfrm>")?;
    Ok(())
}

/// Write a text body with the given element prefix (`p:txBody` on shapes,
/// `a:txBody` in table cells).
fn write_text_body(xml: &mut String, frame: &TextFrame, prefix: &str) -> Result<()> {
    write!(xml, "<{prefix}:txBody>")?;
    xml.push_str("<a:bodyPr/>");
    xml.push_str("<a:lstStyle/>");
    if frame.paragraphs().is_empty() {
        xml.push_str("<a:p/>");
    }
    for para in frame.paragraphs() {
        xml.push_str("<a:p>");
        if let Some(props) = &para.props {
            xml.push_str(props);
        }
        for run in para.runs() {
            xml.push_str("<a:r>");
            match &run.props {
                Some(props) => xml.push_str(props),
                None => xml.push_str(r#"<a:rPr lang="en-US" dirty="0"/>"#),
            }
            write!(xml, "<a:t>{}</a:t>", escape_xml(run.text()))?;
            xml.push_str("</a:r>");
        }
        xml.push_str("</a:p>");
    }
    write!(xml, "</{prefix}:txBody>")?;
    Ok(())
}

/// Write a table shape as a graphic frame holding an `a:tbl`.
fn write_table_frame(
    xml: &mut String,
    shape: &Shape,
    table: &Table,
    shape_id: u32,
) -> Result<()> {
    let bounds = shape.bounds();
    let rows = table.row_count().max(1) as i64;
    let cols = table.column_count().max(1) as i64;

    write_frame_header(xml, shape, shape_id, "Table")?;
    write!(xml, r#"<a:graphic><a:graphicData uri="{}">"#, ns::TABLE_DATA)?;

    xml.push_str("<a:tbl>");
    xml.push_str(concat!(
        r#"<a:tblPr firstRow="1" bandRow="1">"#,
        "<a:tableStyleId>{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}</a:tableStyleId>",
        "</a:tblPr>",
    ));

    xml.push_str("<a:tblGrid>");
    for _ in 0..table.column_count() {
        write!(xml, r#"<a:gridCol w="{}"/>"#, bounds.width / cols)?;
    }
    xml.push_str("</a:tblGrid>");

    for row in table.rows() {
        write!(xml, r#"<a:tr h="{}">"#, bounds.height / rows)?;
        for cell in row.cells() {
            xml.push_str("<a:tc>");
            write_text_body(xml, cell.text_frame(), "a")?;
            xml.push_str("<a:tcPr/>");
            xml.push_str("</a:tc>");
        }
        xml.push_str("</a:tr>");
    }
    xml.push_str("</a:tbl>");

    xml.push_str("</a:graphicData></a:graphic>");
    xml.push_str("</p:graphicFrame>");
    Ok(())
}

/// Write a chart shape as a graphic frame referencing its chart part.
fn write_chart_frame(
    xml: &mut String,
    shape: &Shape,
    shape_id: u32,
    chart_rel_no: u32,
) -> Result<()> {
    write_frame_header(xml, shape, shape_id, "Chart")?;
    write!(xml, r#"<a:graphic><a:graphicData uri="{}">"#, ns::CHART)?;
    write!(
        xml,
        r#"<c:chart xmlns:c="{}" xmlns:r="{}" r:id="rId{}"/>"#,
        ns::CHART,
        ns::REL,
        chart_rel_no
    )?;
    xml.push_str("</a:graphicData></a:graphic>");
    xml.push_str("</p:graphicFrame>");
    Ok(())
}

/// Shared opening of a graphic frame: non-visual properties and transform.
fn write_frame_header(
    xml: &mut String,
    shape: &Shape,
    shape_id: u32,
    default_name: &str,
) -> Result<()> {
    let name = if shape.name().is_empty() {
        format!("{default_name} {shape_id}")
    } else {
        shape.name().to_string()
    };

    xml.push_str("<p:graphicFrame>");
    xml.push_str("<p:nvGraphicFramePr>");
    write!(
        xml,
        r#"<p:cNvPr id="{}" name="{}"/>"#,
        shape_id,
        escape_xml(&name)
    )?;
    xml.push_str(r#"<p:cNvGraphicFramePr><a:graphicFrameLocks noGrp="1"/></p:cNvGraphicFramePr>"#);
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvGraphicFramePr>");
    write_xfrm(xml, shape, "p")?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Chart parts

fn chart_xml(chart: &Chart) -> Result<String> {
    let mut xml = String::with_capacity(4096);
    xml.push_str(template::XML_DECL);
    write!(
        xml,
        r#"<c:chartSpace xmlns:c="{}" xmlns:a="{}" xmlns:r="{}">"#,
        ns::CHART,
        ns::DML,
        ns::REL
    )?;
    xml.push_str(r#"<c:date1904 val="0"/>"#);
    xml.push_str(r#"<c:lang val="en-US"/>"#);
    xml.push_str(r#"<c:roundedCorners val="0"/>"#);
    xml.push_str("<c:chart>");
    xml.push_str(r#"<c:autoTitleDeleted val="1"/>"#);
    xml.push_str("<c:plotArea><c:layout/>");

    let (tag, has_axes) = match chart.kind() {
        ChartKind::Bar => ("c:barChart", true),
        ChartKind::Line => ("c:lineChart", true),
        ChartKind::Pie => ("c:pieChart", false),
    };

    write!(xml, "<{tag}>")?;
    match chart.kind() {
        ChartKind::Bar => {
            xml.push_str(r#"<c:barDir val="col"/>"#);
            xml.push_str(r#"<c:grouping val="clustered"/>"#);
            xml.push_str(r#"<c:varyColors val="0"/>"#);
        }
        ChartKind::Line => {
            xml.push_str(r#"<c:grouping val="standard"/>"#);
            xml.push_str(r#"<c:varyColors val="0"/>"#);
        }
        ChartKind::Pie => {
            xml.push_str(r#"<c:varyColors val="1"/>"#);
        }
    }

    for (i, series) in chart.series().iter().enumerate() {
        write_series(&mut xml, i, series.name(), chart.categories(), series.values())?;
    }

    if has_axes {
        xml.push_str(r#"<c:axId val="111111111"/>"#);
        xml.push_str(r#"<c:axId val="222222222"/>"#);
    } else {
        xml.push_str(r#"<c:firstSliceAng val="0"/>"#);
    }
    write!(xml, "</{tag}>")?;

    if has_axes {
        xml.push_str(concat!(
            "<c:catAx>",
            r#"<c:axId val="111111111"/>"#,
            r#"<c:scaling><c:orientation val="minMax"/></c:scaling>"#,
            r#"<c:delete val="0"/>"#,
            r#"<c:axPos val="b"/>"#,
            r#"<c:crossAx val="222222222"/>"#,
            "</c:catAx>",
            "<c:valAx>",
            r#"<c:axId val="222222222"/>"#,
            r#"<c:scaling><c:orientation val="minMax"/></c:scaling>"#,
            r#"<c:delete val="0"/>"#,
            r#"<c:axPos val="l"/>"#,
            r#"<c:crossAx val="111111111"/>"#,
            "</c:valAx>",
        ));
    }

    xml.push_str("</c:plotArea>");
    xml.push_str(r#"<c:plotVisOnly val="1"/>"#);
    xml.push_str("</c:chart>");
    xml.push_str("</c:chartSpace>");
    Ok(xml)
}

/// Write one `c:ser` with cached name, categories, and values. The cell
/// references mirror the sheet layout the categories and series would
/// occupy in an embedded workbook: categories in column A, one series per
/// column from B on.
fn write_series(
    xml: &mut String,
    index: usize,
    name: &str,
    categories: &[String],
    values: &[f64],
) -> Result<()> {
    let col = col_letters(index + 1);

    xml.push_str("<c:ser>");
    write!(xml, r#"<c:idx val="{index}"/>"#)?;
    write!(xml, r#"<c:order val="{index}"/>"#)?;

    xml.push_str("<c:tx><c:strRef>");
    write!(xml, "<c:f>Sheet1!${col}$1</c:f>")?;
    xml.push_str(r#"<c:strCache><c:ptCount val="1"/>"#);
    write!(xml, r#"<c:pt idx="0"><c:v>{}</c:v></c:pt>"#, escape_xml(name))?;
    xml.push_str("</c:strCache>");
    xml.push_str("</c:strRef></c:tx>");

    xml.push_str("<c:cat><c:strRef>");
    write!(xml, "<c:f>Sheet1!$A$2:$A${}</c:f>", categories.len() + 1)?;
    write!(xml, r#"<c:strCache><c:ptCount val="{}"/>"#, categories.len())?;
    for (k, category) in categories.iter().enumerate() {
        write!(
            xml,
            r#"<c:pt idx="{k}"><c:v>{}</c:v></c:pt>"#,
            escape_xml(category)
        )?;
    }
    xml.push_str("</c:strCache>");
    xml.push_str("</c:strRef></c:cat>");

    xml.push_str("<c:val><c:numRef>");
    write!(xml, "<c:f>Sheet1!${col}$2:${col}${}</c:f>", values.len() + 1)?;
    xml.push_str("<c:numCache><c:formatCode>General</c:formatCode>");
    write!(xml, r#"<c:ptCount val="{}"/>"#, values.len())?;
    for (k, value) in values.iter().enumerate() {
        write!(xml, r#"<c:pt idx="{k}"><c:v>{}</c:v></c:pt>"#, fmt_number(*value))?;
    }
    xml.push_str("</c:numCache>");
    xml.push_str("</c:numRef></c:val>");

    xml.push_str("</c:ser>");
    Ok(())
}

/// Spreadsheet column letters for a 0-based column number (0 -> A, 1 -> B,
/// 26 -> AA).
fn col_letters(mut n: usize) -> String {
    let mut letters = Vec::new();
    loop {
        letters.push(b'A' + (n % 26) as u8);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    letters.reverse();
    String::from_utf8(letters).expect("ASCII letters")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::{Bounds, ChartData};

    #[test]
    fn col_letters_cover_multi_letter_columns() {
        assert_eq!(col_letters(0), "A");
        assert_eq!(col_letters(1), "B");
        assert_eq!(col_letters(25), "Z");
        assert_eq!(col_letters(26), "AA");
        assert_eq!(col_letters(27), "AB");
    }

    #[test]
    fn content_types_list_every_generated_part() {
        let xml = content_types_xml(2, 3, 1);
        assert!(xml.contains(r#"PartName="/ppt/slides/slide2.xml""#));
        assert!(xml.contains(r#"PartName="/ppt/slideLayouts/slideLayout3.xml""#));
        assert!(xml.contains(r#"PartName="/ppt/charts/chart1.xml""#));
        assert!(xml.contains(r#"PartName="/docProps/core.xml""#));
    }

    #[test]
    fn slide_xml_escapes_run_text() {
        let mut slide = Slide::new();
        slide.add_text_box("a < b & c", Bounds::new(0, 0, 1, 1));
        let xml = slide_xml(&slide).unwrap();
        assert!(xml.contains("<a:t>a &lt; b &amp; c</a:t>"));
    }

    #[test]
    fn chart_xml_caches_categories_and_values() {
        let mut chart = Chart::new(ChartKind::Bar);
        let mut data = ChartData::new();
        data.set_categories(["Q1", "Q2"])
            .add_series("2024", vec![1.0, 2.5]);
        chart.replace_data(data);

        let xml = chart_xml(&chart).unwrap();
        assert!(xml.contains("<c:barChart>"));
        assert!(xml.contains("<c:v>Q1</c:v>"));
        assert!(xml.contains("<c:v>2.5</c:v>"));
        assert!(xml.contains("<c:f>Sheet1!$B$2:$B$3</c:f>"));
    }

    #[test]
    fn pie_charts_carry_no_axes() {
        let mut chart = Chart::new(ChartKind::Pie);
        let mut data = ChartData::new();
        data.set_categories(["a"]).add_series("s", vec![1.0]);
        chart.replace_data(data);

        let xml = chart_xml(&chart).unwrap();
        assert!(xml.contains("<c:pieChart>"));
        assert!(!xml.contains("<c:catAx>"));
    }
}
