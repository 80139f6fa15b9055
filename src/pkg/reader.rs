//! Package reader: builds the deck model from a `.pptx` archive.

use std::collections::HashMap;
use std::io::{Cursor, Read};

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use zip::ZipArchive;

use crate::common::unescape_xml;
use crate::error::{Error, Result};
use crate::presentation::{
    Chart, ChartKind, Paragraph, Placeholder, PlaceholderKind, Presentation, Run, Series, Shape,
    Slide, SlideLayout, Table, TableCell, TableRow, TextFrame,
};

/// Build a presentation from the raw bytes of a `.pptx` file.
pub(crate) fn read_package(bytes: &[u8]) -> Result<Presentation> {
    let archive = Archive::from_bytes(bytes)?;

    let main = archive.part("ppt/presentation.xml").map_err(|_| {
        Error::InvalidFormat("missing ppt/presentation.xml, not a PowerPoint package".to_string())
    })?;
    let pres_part = parse_presentation_part(main)?;
    let pres_rels = archive
        .maybe("ppt/_rels/presentation.xml.rels")
        .map(parse_rels)
        .transpose()?
        .unwrap_or_default();

    // Layouts come through the first slide master, in sldLayoutIdLst order.
    let mut layouts = Vec::new();
    let mut layout_part_names = Vec::new();
    if let Some(master_rid) = &pres_part.master_rid
        && let Some(master_target) = pres_rels.get(master_rid)
    {
        let master_name = resolve_target("ppt", master_target);
        if let Some(master_xml) = archive.maybe(&master_name) {
            let master_rels = archive
                .maybe(&rels_name_for(&master_name))
                .map(parse_rels)
                .transpose()?
                .unwrap_or_default();
            let master_base = base_dir(&master_name);
            for rid in parse_layout_rids(master_xml)? {
                let Some(target) = master_rels.get(&rid) else {
                    continue;
                };
                let layout_name = resolve_target(master_base, target);
                let Some(layout_xml) = archive.maybe(&layout_name) else {
                    continue;
                };
                layouts.push(parse_layout(layout_xml)?);
                layout_part_names.push(layout_name);
            }
        }
    }

    // Slides in sldIdLst order.
    let mut slides = Vec::new();
    for rid in &pres_part.slide_rids {
        let target = pres_rels
            .get(rid)
            .ok_or_else(|| Error::PartNotFound(format!("slide relationship {rid}")))?;
        let slide_name = resolve_target("ppt", target);
        let slide_xml = archive.part(&slide_name)?;
        let slide_rels = archive
            .maybe(&rels_name_for(&slide_name))
            .map(parse_rels)
            .transpose()?
            .unwrap_or_default();
        let slide_base = base_dir(&slide_name);

        let shapes = parse_shapes(slide_xml, &slide_rels, &archive, slide_base)?;
        let layout_index = slide_rels.values().find_map(|target| {
            let resolved = resolve_target(slide_base, target);
            layout_part_names.iter().position(|name| name == &resolved)
        });
        slides.push(Slide {
            layout_index,
            shapes,
        });
    }

    Ok(Presentation {
        slides,
        layouts,
        slide_width: pres_part.width,
        slide_height: pres_part.height,
    })
}

// ---------------------------------------------------------------------------
// Archive access

struct Archive {
    parts: HashMap<String, Vec<u8>>,
}

impl Archive {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut zip = ZipArchive::new(Cursor::new(bytes))?;
        let mut parts = HashMap::new();
        for i in 0..zip.len() {
            let mut file = zip.by_index(i)?;
            if !file.is_file() {
                continue;
            }
            let mut data = Vec::with_capacity(file.size() as usize);
            file.read_to_end(&mut data)?;
            parts.insert(file.name().to_string(), data);
        }
        Ok(Self { parts })
    }

    fn part(&self, name: &str) -> Result<&[u8]> {
        self.parts
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::PartNotFound(name.to_string()))
    }

    fn maybe(&self, name: &str) -> Option<&[u8]> {
        self.parts.get(name).map(Vec::as_slice)
    }
}

/// `ppt/slides/slide1.xml` -> `ppt/slides/_rels/slide1.xml.rels`
fn rels_name_for(part_name: &str) -> String {
    match part_name.rfind('/') {
        Some(pos) => format!(
            "{}/_rels/{}.rels",
            &part_name[..pos],
            &part_name[pos + 1..]
        ),
        None => format!("_rels/{part_name}.rels"),
    }
}

/// Directory portion of a part name (`ppt/slides` for `ppt/slides/slide1.xml`).
fn base_dir(part_name: &str) -> &str {
    match part_name.rfind('/') {
        Some(pos) => &part_name[..pos],
        None => "",
    }
}

/// Resolve a relationship target against the directory of its source part.
fn resolve_target(base: &str, target: &str) -> String {
    if let Some(absolute) = target.strip_prefix('/') {
        return absolute.to_string();
    }
    let mut segments: Vec<&str> = base.split('/').filter(|s| !s.is_empty()).collect();
    for segment in target.split('/') {
        match segment {
            ".." => {
                segments.pop();
            }
            "" | "." => {}
            s => segments.push(s),
        }
    }
    segments.join("/")
}

// ---------------------------------------------------------------------------
// Small XML helpers

fn attr_value(e: &BytesStart, key: &[u8]) -> Option<String> {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == key {
            return std::str::from_utf8(&attr.value)
                .ok()
                .map(unescape_xml);
        }
    }
    None
}

/// The `r:id` attribute of an element, accepting any prefix bound to the
/// relationships namespace as long as the value looks like one.
fn rid_attr(e: &BytesStart) -> Option<String> {
    for attr in e.attributes().flatten() {
        let key = attr.key.as_ref();
        if key == b"r:id" || attr.key.local_name().as_ref() == b"id" {
            if let Ok(value) = std::str::from_utf8(&attr.value)
                && value.starts_with("rId")
            {
                return Some(value.to_string());
            }
        }
    }
    None
}

/// Reconstruct a raw element (start tag, children, end tag) from the reader,
/// consuming events through the element's end. The start event has already
/// been read by the caller and is passed in.
fn capture_element(reader: &mut Reader<&[u8]>, start: &BytesStart) -> Result<String> {
    let mut raw = Vec::new();
    append_start(&mut raw, start);
    let mut depth = 1usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                depth += 1;
                append_start(&mut raw, &e);
            }
            Ok(Event::Empty(e)) => append_empty(&mut raw, &e),
            Ok(Event::Text(e)) => raw.extend_from_slice(e.as_ref()),
            Ok(Event::End(e)) => {
                raw.extend_from_slice(b"</");
                raw.extend_from_slice(e.name().as_ref());
                raw.push(b'>');
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            Ok(Event::Eof) => {
                return Err(Error::Xml("unexpected end of element".to_string()));
            }
            Err(e) => return Err(Error::Xml(e.to_string())),
            _ => {}
        }
    }

    String::from_utf8(raw).map_err(|e| Error::Xml(e.to_string()))
}

/// Render an `Empty` event back to its raw `<tag …/>` form.
fn raw_empty(e: &BytesStart) -> String {
    let mut raw = Vec::new();
    append_empty(&mut raw, e);
    String::from_utf8_lossy(&raw).into_owned()
}

fn append_start(raw: &mut Vec<u8>, e: &BytesStart) {
    raw.push(b'<');
    raw.extend_from_slice(e.name().as_ref());
    append_attrs(raw, e);
    raw.push(b'>');
}

fn append_empty(raw: &mut Vec<u8>, e: &BytesStart) {
    raw.push(b'<');
    raw.extend_from_slice(e.name().as_ref());
    append_attrs(raw, e);
    raw.extend_from_slice(b"/>");
}

fn append_attrs(raw: &mut Vec<u8>, e: &BytesStart) {
    for attr in e.attributes().flatten() {
        raw.push(b' ');
        raw.extend_from_slice(attr.key.as_ref());
        raw.extend_from_slice(b"=\"");
        raw.extend_from_slice(&attr.value);
        raw.push(b'"');
    }
}

/// Skip the remainder of an element whose start tag was just read.
fn skip_element(reader: &mut Reader<&[u8]>) -> Result<()> {
    let mut depth = 1usize;
    loop {
        match reader.read_event() {
            Ok(Event::Start(_)) => depth += 1,
            Ok(Event::End(_)) => {
                depth -= 1;
                if depth == 0 {
                    return Ok(());
                }
            }
            Ok(Event::Eof) => {
                return Err(Error::Xml("unexpected end of element".to_string()));
            }
            Err(e) => return Err(Error::Xml(e.to_string())),
            _ => {}
        }
    }
}

// ---------------------------------------------------------------------------
// presentation.xml

struct PresentationPart {
    slide_rids: Vec<String>,
    master_rid: Option<String>,
    width: i64,
    height: i64,
}

fn parse_presentation_part(xml: &[u8]) -> Result<PresentationPart> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut part = PresentationPart {
        slide_rids: Vec::new(),
        master_rid: None,
        width: 9_144_000,
        height: 6_858_000,
    };

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                b"sldId" => {
                    if let Some(rid) = rid_attr(&e) {
                        part.slide_rids.push(rid);
                    }
                }
                b"sldMasterId" => {
                    if part.master_rid.is_none() {
                        part.master_rid = rid_attr(&e);
                    }
                }
                b"sldSz" => {
                    if let Some(cx) = attr_value(&e, b"cx").and_then(|v| v.parse().ok()) {
                        part.width = cx;
                    }
                    if let Some(cy) = attr_value(&e, b"cy").and_then(|v| v.parse().ok()) {
                        part.height = cy;
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::Xml(e.to_string())),
            _ => {}
        }
    }

    Ok(part)
}

/// Parse a `.rels` part into an rId -> target map.
fn parse_rels(xml: &[u8]) -> Result<HashMap<String, String>> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut rels = HashMap::new();
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                if e.local_name().as_ref() == b"Relationship"
                    && let (Some(id), Some(target)) =
                        (attr_value(&e, b"Id"), attr_value(&e, b"Target"))
                {
                    rels.insert(id, target);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::Xml(e.to_string())),
            _ => {}
        }
    }
    Ok(rels)
}

/// Relationship IDs of a master's layouts, in `sldLayoutIdLst` order.
fn parse_layout_rids(xml: &[u8]) -> Result<Vec<String>> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut rids = Vec::new();
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                if e.local_name().as_ref() == b"sldLayoutId"
                    && let Some(rid) = rid_attr(&e)
                {
                    rids.push(rid);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::Xml(e.to_string())),
            _ => {}
        }
    }
    Ok(rids)
}

// ---------------------------------------------------------------------------
// Layout parts

fn parse_layout(xml: &[u8]) -> Result<SlideLayout> {
    let mut name = String::new();
    {
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(true);
        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                    if e.local_name().as_ref() == b"cSld" {
                        if let Some(value) = attr_value(&e, b"name") {
                            name = value;
                        }
                        break;
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(Error::Xml(e.to_string())),
                _ => {}
            }
        }
    }

    // A layout's interesting shapes are its placeholder slots.
    let empty_rels = HashMap::new();
    let shapes = parse_shapes(xml, &empty_rels, &Archive::empty(), "")?;
    let placeholders = shapes
        .into_iter()
        .filter(|s| s.placeholder.is_some())
        .collect();
    Ok(SlideLayout::new(name, placeholders))
}

impl Archive {
    /// An archive with no parts, for contexts that cannot follow
    /// relationships (layout parsing never needs to).
    fn empty() -> Self {
        Self {
            parts: HashMap::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Shape trees

/// Parse the shapes of a slide-like part's `spTree`, in document order.
fn parse_shapes(
    xml: &[u8],
    rels: &HashMap<String, String>,
    archive: &Archive,
    base: &str,
) -> Result<Vec<Shape>> {
    // no text trimming: run text must survive verbatim, spaces included
    let mut reader = Reader::from_reader(xml);

    let mut shapes = Vec::new();
    let mut in_sp_tree = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.local_name().as_ref() {
                b"spTree" => in_sp_tree = true,
                b"sp" | b"pic" | b"graphicFrame" | b"grpSp" | b"cxnSp" if in_sp_tree => {
                    let kind = e.local_name().as_ref().to_vec();
                    shapes.push(parse_shape_element(&mut reader, &kind, rels, archive, base)?);
                }
                _ => {}
            },
            Ok(Event::End(e)) => {
                if e.local_name().as_ref() == b"spTree" {
                    in_sp_tree = false;
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::Xml(e.to_string())),
            _ => {}
        }
    }

    Ok(shapes)
}

/// Parse one shape element; the start tag has already been consumed.
fn parse_shape_element(
    reader: &mut Reader<&[u8]>,
    kind: &[u8],
    rels: &HashMap<String, String>,
    archive: &Archive,
    base: &str,
) -> Result<Shape> {
    let is_sp = kind == b"sp";
    let is_frame = kind == b"graphicFrame";

    let mut shape = Shape::default();
    let mut got_off = false;
    let mut got_ext = false;
    let mut depth = 1usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.local_name().as_ref() {
                b"txBody" if is_sp && shape.text_frame.is_none() => {
                    shape.text_frame = Some(parse_text_body(reader)?);
                }
                b"tbl" if is_frame && shape.table.is_none() => {
                    shape.table = Some(parse_table(reader)?);
                }
                b"cNvPr" => {
                    if shape.name.is_empty()
                        && let Some(name) = attr_value(&e, b"name")
                    {
                        shape.name = name;
                    }
                    depth += 1;
                }
                // nested group members belong to their group, not the tree
                b"grpSp" | b"sp" | b"pic" | b"graphicFrame" | b"cxnSp" => {
                    skip_element(reader)?;
                }
                _ => depth += 1,
            },
            Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                b"off" if !got_off => {
                    got_off = true;
                    if let Some(x) = attr_value(&e, b"x").and_then(|v| v.parse().ok()) {
                        shape.bounds.left = x;
                    }
                    if let Some(y) = attr_value(&e, b"y").and_then(|v| v.parse().ok()) {
                        shape.bounds.top = y;
                    }
                }
                b"ext" if !got_ext => {
                    got_ext = true;
                    if let Some(cx) = attr_value(&e, b"cx").and_then(|v| v.parse().ok()) {
                        shape.bounds.width = cx;
                    }
                    if let Some(cy) = attr_value(&e, b"cy").and_then(|v| v.parse().ok()) {
                        shape.bounds.height = cy;
                    }
                }
                b"ph" if shape.placeholder.is_none() => {
                    let kind = PlaceholderKind::from_attr(attr_value(&e, b"type").as_deref());
                    let idx = attr_value(&e, b"idx")
                        .and_then(|v| v.parse().ok())
                        .unwrap_or(0);
                    shape.placeholder = Some(Placeholder::new(idx, kind));
                }
                b"cNvPr" => {
                    if shape.name.is_empty()
                        && let Some(name) = attr_value(&e, b"name")
                    {
                        shape.name = name;
                    }
                }
                b"chart" if is_frame && shape.chart.is_none() => {
                    if let Some(rid) = rid_attr(&e)
                        && let Some(target) = rels.get(&rid)
                        && let Some(chart_xml) = archive.maybe(&resolve_target(base, target))
                    {
                        shape.chart = Some(parse_chart(chart_xml)?);
                    }
                }
                _ => {}
            },
            Ok(Event::End(_)) => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            Ok(Event::Eof) => {
                return Err(Error::Xml("unexpected end of shape element".to_string()));
            }
            Err(e) => return Err(Error::Xml(e.to_string())),
            _ => {}
        }
    }

    Ok(shape)
}

/// Parse a `txBody` element into a text frame; the start tag has already
/// been consumed.
fn parse_text_body(reader: &mut Reader<&[u8]>) -> Result<TextFrame> {
    let mut frame = TextFrame::new();
    let mut para: Option<Paragraph> = None;
    let mut run: Option<Run> = None;
    let mut in_text = false;
    let mut depth = 1usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                match e.local_name().as_ref() {
                    b"p" => para = Some(Paragraph::default()),
                    b"r" if para.is_some() => run = Some(Run::default()),
                    b"pPr" if para.is_some() && run.is_none() => {
                        if let Some(p) = para.as_mut() {
                            p.props = Some(capture_element(reader, &e)?);
                        }
                        continue; // subtree fully consumed
                    }
                    b"rPr" if run.is_some() => {
                        if let Some(r) = run.as_mut() {
                            r.props = Some(capture_element(reader, &e)?);
                        }
                        continue;
                    }
                    b"t" => in_text = true,
                    _ => {}
                }
                depth += 1;
            }
            Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                b"pPr" if para.is_some() && run.is_none() => {
                    if let Some(p) = para.as_mut() {
                        p.props = Some(raw_empty(&e));
                    }
                }
                b"rPr" if run.is_some() => {
                    if let Some(r) = run.as_mut() {
                        r.props = Some(raw_empty(&e));
                    }
                }
                _ => {}
            },
            Ok(Event::Text(e)) => {
                if in_text && let Some(r) = run.as_mut() {
                    let text = std::str::from_utf8(e.as_ref())
                        .map_err(|err| Error::Xml(err.to_string()))?;
                    r.text.push_str(&unescape_xml(text));
                }
            }
            Ok(Event::End(e)) => {
                match e.local_name().as_ref() {
                    b"t" => in_text = false,
                    b"r" => {
                        if let (Some(p), Some(r)) = (para.as_mut(), run.take()) {
                            p.runs.push(r);
                        }
                    }
                    b"p" => {
                        if let Some(p) = para.take() {
                            frame.paragraphs.push(p);
                        }
                    }
                    _ => {}
                }
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            Ok(Event::Eof) => {
                return Err(Error::Xml("unexpected end of text body".to_string()));
            }
            Err(e) => return Err(Error::Xml(e.to_string())),
            _ => {}
        }
    }

    Ok(frame)
}

/// Parse an `a:tbl` element into a table; the start tag has already been
/// consumed.
fn parse_table(reader: &mut Reader<&[u8]>) -> Result<Table> {
    let mut table = Table::default();
    let mut row: Option<TableRow> = None;
    let mut cell: Option<TableCell> = None;
    let mut depth = 1usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                match e.local_name().as_ref() {
                    b"tr" => row = Some(TableRow::default()),
                    b"tc" if row.is_some() => cell = Some(TableCell::default()),
                    b"txBody" if cell.is_some() => {
                        if let Some(c) = cell.as_mut() {
                            c.text_frame = parse_text_body(reader)?;
                        }
                        continue; // subtree fully consumed
                    }
                    _ => {}
                }
                depth += 1;
            }
            Ok(Event::End(e)) => {
                match e.local_name().as_ref() {
                    b"tc" => {
                        if let (Some(r), Some(c)) = (row.as_mut(), cell.take()) {
                            r.cells.push(c);
                        }
                    }
                    b"tr" => {
                        if let Some(r) = row.take() {
                            table.rows.push(r);
                        }
                    }
                    _ => {}
                }
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            Ok(Event::Eof) => {
                return Err(Error::Xml("unexpected end of table".to_string()));
            }
            Err(e) => return Err(Error::Xml(e.to_string())),
            _ => {}
        }
    }

    Ok(table)
}

// ---------------------------------------------------------------------------
// Chart parts

/// Parse a chart part into the data-side chart model.
///
/// Categories and values come from the cached points (`c:strCache` /
/// `c:numCache`); the chart's categories are the first series' categories.
fn parse_chart(xml: &[u8]) -> Result<Chart> {
    let mut reader = Reader::from_reader(xml);

    let mut chart = Chart::default();
    let mut kind_seen = false;
    let mut stack: Vec<Vec<u8>> = Vec::new();
    let mut name = String::new();
    let mut categories: Vec<String> = Vec::new();
    let mut values: Vec<f64> = Vec::new();
    let mut in_series = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let local = e.local_name().as_ref().to_vec();
                if !kind_seen {
                    match local.as_slice() {
                        b"barChart" | b"bar3DChart" => {
                            chart.kind = ChartKind::Bar;
                            kind_seen = true;
                        }
                        b"lineChart" | b"line3DChart" => {
                            chart.kind = ChartKind::Line;
                            kind_seen = true;
                        }
                        b"pieChart" | b"pie3DChart" | b"doughnutChart" => {
                            chart.kind = ChartKind::Pie;
                            kind_seen = true;
                        }
                        _ => {}
                    }
                }
                if local == b"ser" {
                    in_series = true;
                    name.clear();
                    categories.clear();
                    values.clear();
                }
                stack.push(local);
            }
            Ok(Event::Text(e)) => {
                if in_series && stack.last().is_some_and(|top| top.as_slice() == b"v") {
                    let text = std::str::from_utf8(e.as_ref())
                        .map_err(|err| Error::Xml(err.to_string()))?;
                    let text = unescape_xml(text);
                    // the nearest enclosing group decides what this value is
                    match nearest_group(&stack) {
                        Some(group) if group == b"tx" => name.push_str(&text),
                        Some(group) if group == b"cat" => categories.push(text),
                        Some(group) if group == b"val" => {
                            values.push(text.trim().parse().unwrap_or(0.0));
                        }
                        _ => {}
                    }
                }
            }
            Ok(Event::End(e)) => {
                if e.local_name().as_ref() == b"ser" && in_series {
                    in_series = false;
                    if chart.series.is_empty() {
                        chart.categories = std::mem::take(&mut categories);
                    }
                    chart
                        .series
                        .push(Series::new(std::mem::take(&mut name), std::mem::take(&mut values)));
                }
                stack.pop();
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::Xml(e.to_string())),
            _ => {}
        }
    }

    Ok(chart)
}

/// The nearest of `tx`/`cat`/`val` on the element stack, scanning outward.
fn nearest_group(stack: &[Vec<u8>]) -> Option<&[u8]> {
    stack
        .iter()
        .rev()
        .map(Vec::as_slice)
        .find(|&local| local == b"tx" || local == b"cat" || local == b"val")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rels_names_and_bases() {
        assert_eq!(
            rels_name_for("ppt/slides/slide1.xml"),
            "ppt/slides/_rels/slide1.xml.rels"
        );
        assert_eq!(base_dir("ppt/slides/slide1.xml"), "ppt/slides");
        assert_eq!(base_dir("presentation.xml"), "");
    }

    #[test]
    fn target_resolution_handles_relative_paths() {
        assert_eq!(
            resolve_target("ppt", "slides/slide1.xml"),
            "ppt/slides/slide1.xml"
        );
        assert_eq!(
            resolve_target("ppt/slides", "../charts/chart1.xml"),
            "ppt/charts/chart1.xml"
        );
        assert_eq!(resolve_target("ppt", "/docProps/core.xml"), "docProps/core.xml");
    }

    #[test]
    fn text_body_parsing_keeps_runs_and_props() {
        let xml = br#"<p:txBody><a:bodyPr/><a:p><a:pPr algn="ctr"/><a:r><a:rPr b="1"/><a:t>bold &amp; brave</a:t></a:r><a:r><a:t> tail</a:t></a:r></a:p><a:p><a:r><a:t>second</a:t></a:r></a:p></p:txBody>"#;
        let mut reader = Reader::from_reader(&xml[..]);
        // consume the start tag first, as the shape parser would
        let Ok(Event::Start(_)) = reader.read_event() else {
            panic!("expected start tag");
        };

        let frame = parse_text_body(&mut reader).unwrap();
        assert_eq!(frame.paragraphs().len(), 2);
        let first = &frame.paragraphs()[0];
        assert_eq!(first.runs().len(), 2);
        assert_eq!(first.runs()[0].text(), "bold & brave");
        assert_eq!(first.text(), "bold & brave tail");
        assert_eq!(frame.paragraphs()[1].text(), "second");
    }

    #[test]
    fn chart_parsing_reads_cached_series() {
        let xml = br#"<c:chartSpace><c:chart><c:plotArea><c:lineChart>
            <c:ser><c:idx val="0"/>
              <c:tx><c:strRef><c:f>Sheet1!$B$1</c:f><c:strCache><c:pt idx="0"><c:v>2024</c:v></c:pt></c:strCache></c:strRef></c:tx>
              <c:cat><c:strRef><c:f>Sheet1!$A$2:$A$3</c:f><c:strCache><c:pt idx="0"><c:v>Q1</c:v></c:pt><c:pt idx="1"><c:v>Q2</c:v></c:pt></c:strCache></c:strRef></c:cat>
              <c:val><c:numRef><c:f>Sheet1!$B$2:$B$3</c:f><c:numCache><c:pt idx="0"><c:v>1.5</c:v></c:pt><c:pt idx="1"><c:v>3</c:v></c:pt></c:numCache></c:numRef></c:val>
            </c:ser>
        </c:lineChart></c:plotArea></c:chart></c:chartSpace>"#;

        let chart = parse_chart(xml).unwrap();
        assert_eq!(chart.kind(), ChartKind::Line);
        assert_eq!(chart.categories(), ["Q1", "Q2"]);
        assert_eq!(chart.series().len(), 1);
        assert_eq!(chart.series()[0].name(), "2024");
        assert_eq!(chart.series()[0].values(), [1.5, 3.0]);
    }
}
