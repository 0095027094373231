use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::anyhow;
use roundview_engine::bitmap::{Drawable, load_drawable};
use roundview_engine::coords::Corner;
use roundview_mkml::ast::{Attr, DslDocument, Node, Value};
use roundview_mkml::parse_str;

use crate::dsl::error::BuildError;
use crate::host::{DefaultHost, LayoutDim, LayoutParams};
use crate::metrics::DisplayMetrics;
use crate::widget::Element;
use crate::widgets::color_band::ColorBandView;
use crate::widgets::flex::{Align, Column, Row};
use crate::widgets::round_image::{FitMode, RoundImageConfig, RoundImageView, Shape};
use crate::widgets::video_cover::VideoCoverView;

// ── AssetSource ───────────────────────────────────────────────────────────

/// Resolves the image names used in a document to drawables.
pub trait AssetSource {
    fn load(&self, name: &str) -> anyhow::Result<Rc<dyn Drawable>>;
}

/// Loads images from files relative to a root directory.
#[derive(Debug, Clone)]
pub struct FileAssets {
    root: PathBuf,
}

impl FileAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetSource for FileAssets {
    fn load(&self, name: &str) -> anyhow::Result<Rc<dyn Drawable>> {
        load_drawable(self.root.join(name))
    }
}

/// In-memory drawables keyed by name.
impl AssetSource for HashMap<String, Rc<dyn Drawable>> {
    fn load(&self, name: &str) -> anyhow::Result<Rc<dyn Drawable>> {
        self.get(name).cloned().ok_or_else(|| anyhow!("no drawable registered as {name:?}"))
    }
}

// ── DslBindings ───────────────────────────────────────────────────────────

/// Runtime resources supplied by the application when building views.
pub struct DslBindings {
    /// Used for `dp`/`sp` attribute values and handed to every view.
    pub metrics: DisplayMetrics,
    pub assets: Box<dyn AssetSource>,
}

impl DslBindings {
    pub fn new(assets: impl AssetSource + 'static) -> Self {
        Self { metrics: DisplayMetrics::default(), assets: Box::new(assets) }
    }

    pub fn with_metrics(mut self, metrics: DisplayMetrics) -> Self {
        self.metrics = metrics;
        self
    }
}

// ── BuiltView ─────────────────────────────────────────────────────────────

/// One top-level view of a document.
pub struct BuiltView {
    /// The node's `id` attribute, if any.
    pub id: Option<String>,
    pub element: Element,
}

// ── DslLoader ─────────────────────────────────────────────────────────────

/// Turns `.mkml` documents into widget trees.
#[derive(Debug, Default)]
pub struct DslLoader;

impl DslLoader {
    pub fn new() -> Self {
        Self
    }

    /// Parse and build every top-level view of `src`.
    pub fn load(&self, src: &str, bindings: &DslBindings) -> Result<Vec<BuiltView>, BuildError> {
        let doc = parse_str(src)?;
        self.build(&doc, bindings)
    }

    pub fn build(&self, doc: &DslDocument, bindings: &DslBindings) -> Result<Vec<BuiltView>, BuildError> {
        doc.nodes
            .iter()
            .map(|node| {
                Ok(BuiltView {
                    id: node.attr_str("id").map(str::to_owned),
                    element: self.build_node(node, bindings)?,
                })
            })
            .collect()
    }

    fn build_node(&self, node: &Node, bindings: &DslBindings) -> Result<Element, BuildError> {
        match node.view.as_str() {
            "RoundImageView" => Ok(self.build_round_image(node, bindings)?.into()),
            "VideoCoverView" => Ok(self.build_video_cover(node, bindings)?.into()),
            "ColorBandView" => Ok(self.build_color_band(node, bindings)?.into()),
            "Row" => {
                let (spacing, align) = self.flex_attrs(node, bindings)?;
                let mut row = Row::new().spacing(spacing).cross_align(align);
                for child in &node.children {
                    row = row.child(self.build_node(child, bindings)?);
                }
                Ok(row.into())
            }
            "Column" => {
                let (spacing, align) = self.flex_attrs(node, bindings)?;
                let mut col = Column::new().spacing(spacing).cross_align(align);
                for child in &node.children {
                    col = col.child(self.build_node(child, bindings)?);
                }
                Ok(col.into())
            }
            name => Err(BuildError::UnknownView { name: name.to_string(), line: node.line }),
        }
    }

    // ── RoundImageView ────────────────────────────────────────────────────

    /// Build a single image view from its declaration.
    pub fn build_round_image(
        &self,
        node: &Node,
        bindings: &DslBindings,
    ) -> Result<RoundImageView, BuildError> {
        let m = &bindings.metrics;
        let mut config = RoundImageConfig::new();
        let mut params = LayoutParams::default();
        let (mut fixed_w, mut fixed_h) = (None, None);
        let mut src = node.content.clone();

        // Attributes apply in source order, so a repeated key ends up with its last value.
        for attr in &node.attrs {
            match attr.key.as_str() {
                "id" => {}
                "src" => src = Some(string(node, attr)?),
                "shape" | "type" => config.shape = shape(node, attr)?,
                "radius" => config = config.radius(pixels(node, attr, m)? as f32),
                "left_top_radius" => config = config.corner(Corner::TopLeft, pixels(node, attr, m)? as f32),
                "right_top_radius" => config = config.corner(Corner::TopRight, pixels(node, attr, m)? as f32),
                "left_bottom_radius" => config = config.corner(Corner::BottomLeft, pixels(node, attr, m)? as f32),
                "right_bottom_radius" => config = config.corner(Corner::BottomRight, pixels(node, attr, m)? as f32),
                "aspect_ratio" => config.aspect_ratio = number(node, attr)?,
                "fit" => config.fit = fit(node, attr)?,
                "fit_entire_image" => {
                    config.fit = match (boolean(node, attr)?, config.fit) {
                        (true, _) => FitMode::Fill,
                        (false, FitMode::Fill) => FitMode::Crop,
                        (false, fit) => fit,
                    }
                }
                "fixed_width" => fixed_w = Some(whole(node, attr, m)?),
                "fixed_height" => fixed_h = Some(whole(node, attr, m)?),
                "width" => params.width = layout_dim(node, attr, m)?,
                "height" => params.height = layout_dim(node, attr, m)?,
                other => log::warn!("line {}: RoundImageView ignores unknown attribute `{other}`", attr.line),
            }
        }
        if let (Some(w), Some(h)) = (fixed_w, fixed_h) {
            config = config.fixed_size(w, h);
        }
        if !node.children.is_empty() {
            log::warn!("line {}: RoundImageView ignores its {} child view(s)", node.line, node.children.len());
        }

        let mut view = RoundImageView::with_host(config, DefaultHost::new(params)).with_metrics(*m);
        if let Some(drawable) = load_src(node, src, bindings)? {
            view = view.with_drawable(drawable);
        }
        log::debug!("built RoundImageView at line {}: {:?}", node.line, view.config());
        Ok(view)
    }

    // ── VideoCoverView / ColorBandView ────────────────────────────────────

    pub fn build_video_cover(&self, node: &Node, bindings: &DslBindings) -> Result<VideoCoverView, BuildError> {
        let mut plain = PlainImage::new(node);
        for attr in &node.attrs {
            if !plain.apply(node, attr, &bindings.metrics)? {
                log::warn!("line {}: VideoCoverView ignores unknown attribute `{}`", attr.line, attr.key);
            }
        }
        let mut view = VideoCoverView::with_host(DefaultHost::new(plain.params));
        if let Some(drawable) = load_src(node, plain.src, bindings)? {
            view = view.with_drawable(drawable);
        }
        Ok(view)
    }

    pub fn build_color_band(&self, node: &Node, bindings: &DslBindings) -> Result<ColorBandView, BuildError> {
        let mut plain = PlainImage::new(node);
        let mut progress = None;
        for attr in &node.attrs {
            if attr.key == "progress" {
                progress = Some(number(node, attr)?);
            } else if !plain.apply(node, attr, &bindings.metrics)? {
                log::warn!("line {}: ColorBandView ignores unknown attribute `{}`", attr.line, attr.key);
            }
        }
        let mut view = ColorBandView::with_host(DefaultHost::new(plain.params));
        if let Some(p) = progress {
            view = view.with_progress(p);
        }
        if let Some(drawable) = load_src(node, plain.src, bindings)? {
            view = view.with_drawable(drawable);
        }
        Ok(view)
    }

    // ── Row / Column ──────────────────────────────────────────────────────

    fn flex_attrs(&self, node: &Node, bindings: &DslBindings) -> Result<(f32, Align), BuildError> {
        let mut spacing = 0.0;
        let mut align = Align::Start;
        for attr in &node.attrs {
            match attr.key.as_str() {
                "gap" | "spacing" => spacing = pixels(node, attr, &bindings.metrics)?.max(0) as f32,
                "align" => {
                    align = match &attr.value {
                        Value::Ident(s) if s == "start" => Align::Start,
                        Value::Ident(s) if s == "center" => Align::Center,
                        Value::Ident(s) if s == "end" => Align::End,
                        _ => return Err(invalid(node, attr, "start, center or end")),
                    }
                }
                "id" => {}
                other => log::warn!("line {}: {} ignores unknown attribute `{other}`", attr.line, node.view),
            }
        }
        Ok((spacing, align))
    }
}

// ── shared image attributes ───────────────────────────────────────────────

/// `src`, `width`, `height` and `id`, common to every image view.
struct PlainImage {
    src: Option<String>,
    params: LayoutParams,
}

impl PlainImage {
    fn new(node: &Node) -> Self {
        if !node.children.is_empty() {
            log::warn!("line {}: {} ignores its {} child view(s)", node.line, node.view, node.children.len());
        }
        Self { src: node.content.clone(), params: LayoutParams::default() }
    }

    /// `false` when `attr` is not one of the shared keys.
    fn apply(&mut self, node: &Node, attr: &Attr, m: &DisplayMetrics) -> Result<bool, BuildError> {
        match attr.key.as_str() {
            "id" => {}
            "src" => self.src = Some(string(node, attr)?),
            "width" => self.params.width = layout_dim(node, attr, m)?,
            "height" => self.params.height = layout_dim(node, attr, m)?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}

fn load_src(node: &Node, src: Option<String>, bindings: &DslBindings) -> Result<Option<Rc<dyn Drawable>>, BuildError> {
    let Some(name) = src else { return Ok(None) };
    bindings
        .assets
        .load(&name)
        .map(Some)
        .map_err(|source| BuildError::Asset { name, line: node.line, source })
}

// ── value conversion ──────────────────────────────────────────────────────

fn invalid(node: &Node, attr: &Attr, expected: &'static str) -> BuildError {
    let found = match &attr.value {
        Value::Str(s) | Value::Ident(s) => format!("{} `{s}`", attr.value.kind()),
        other => other.kind().to_string(),
    };
    BuildError::InvalidValue {
        view: node.view.clone(),
        key: attr.key.clone(),
        expected,
        found,
        line: attr.line,
    }
}

fn string(node: &Node, attr: &Attr) -> Result<String, BuildError> {
    match &attr.value {
        Value::Str(s) | Value::Ident(s) => Ok(s.clone()),
        _ => Err(invalid(node, attr, "a string")),
    }
}

fn number(node: &Node, attr: &Attr) -> Result<f32, BuildError> {
    match attr.value {
        Value::Number(v) => Ok(v),
        _ => Err(invalid(node, attr, "a number")),
    }
}

fn boolean(node: &Node, attr: &Attr) -> Result<bool, BuildError> {
    match attr.value {
        Value::Bool(b) => Ok(b),
        _ => Err(invalid(node, attr, "true or false")),
    }
}

/// A length in device pixels; bare numbers are pixels.
fn pixels(node: &Node, attr: &Attr, m: &DisplayMetrics) -> Result<i32, BuildError> {
    match attr.value {
        Value::Number(v) => Ok(m.dimension_pixel_size(v, roundview_mkml::Unit::Px)),
        Value::Dimension(v, unit) => Ok(m.dimension_pixel_size(v, unit)),
        _ => Err(invalid(node, attr, "a length")),
    }
}

/// A bare integer, or a length converted to pixels.
fn whole(node: &Node, attr: &Attr, m: &DisplayMetrics) -> Result<i32, BuildError> {
    match attr.value {
        Value::Number(v) => Ok(v as i32),
        Value::Dimension(..) => pixels(node, attr, m),
        _ => Err(invalid(node, attr, "an integer")),
    }
}

fn shape(node: &Node, attr: &Attr) -> Result<Shape, BuildError> {
    match &attr.value {
        Value::Ident(s) if s == "circle" => Ok(Shape::Circle),
        Value::Ident(s) if s == "round" || s == "round_rect" => Ok(Shape::RoundRect),
        Value::Number(v) => Ok(Shape::from_raw(*v as i32)),
        _ => Err(invalid(node, attr, "circle, round or a shape code")),
    }
}

fn fit(node: &Node, attr: &Attr) -> Result<FitMode, BuildError> {
    match &attr.value {
        Value::Ident(s) if s == "fill" => Ok(FitMode::Fill),
        Value::Ident(s) if s == "crop" => Ok(FitMode::Crop),
        Value::Ident(s) if s == "center_crop" => Ok(FitMode::CenterCrop),
        _ => Err(invalid(node, attr, "fill, crop or center_crop")),
    }
}

fn layout_dim(node: &Node, attr: &Attr, m: &DisplayMetrics) -> Result<LayoutDim, BuildError> {
    match &attr.value {
        Value::Ident(s) if s == "wrap" || s == "wrap_content" => Ok(LayoutDim::Wrap),
        Value::Ident(s) if s == "fill" || s == "match_parent" => Ok(LayoutDim::Fill),
        Value::Number(_) | Value::Dimension(..) => Ok(LayoutDim::Exact(pixels(node, attr, m)?.max(0) as f32)),
        _ => Err(invalid(node, attr, "wrap, fill or a length")),
    }
}
