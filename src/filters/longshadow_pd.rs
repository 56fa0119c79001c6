//! Extrusion via Long Shadow (pixel data)
//!
//! A long shadow whose colours come from a motion-blurred copy of the
//! source: the blur is composited atop the shadow render, then recoloured.
//!
//! ```text
//! input -> long_shadow -> atop -> hue_chroma -> output
//! input -> blur ------------^ (aux)
//! ```
//!
//! With `ls2` set, `long_shadow_fading` takes `long_shadow`'s place.

use log::debug;

use crate::error::Result;
use crate::graph::{link_many, GraphHost, NodeId, Pad};
use crate::meta::{AliasTable, Attached, MetaOperation, OperationKeys};
use crate::ops::{OP_HUE_CHROMA, OP_LONG_SHADOW, OP_MOTION_BLUR_LINEAR, OP_SRC_ATOP};
use crate::params::{Composition, ParamSet, ParamSpec, ShadowStyle, ROLE_OUTPUT_EXTENT};

pub const LONG_SHADOW_PD_KEYS: OperationKeys = OperationKeys {
    name: "gegl:long-shadow-pd",
    title: "Extrusion via Long Shadow",
    categories: "Artistic",
    reference_hash: "45ed1636v1f3agbr2549lfl5s001b2ac",
    description: "Fork of the existing Long Shadow filter but it uses Pixel Data. \
                  You are required to use the behind blend mode. Or run this filter \
                  as a duplicate layer below your image.",
};

pub const PARAM_STYLE: &str = "style";
pub const PARAM_STYLE2: &str = "style2";
pub const PARAM_ANGLE: &str = "angle";
pub const PARAM_LENGTH: &str = "length";
pub const PARAM_COMPOSITION: &str = "composition";
pub const PARAM_LENGTH_BLUR: &str = "lengthblur";
pub const PARAM_FADING_MODE: &str = "ls2";
pub const PARAM_CHROMA: &str = "chroma";
pub const PARAM_LIGHTNESS: &str = "lightness";

/// Handles to the sub-graph nodes, kept for rewiring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LongShadowPdNodes {
    pub input: NodeId,
    pub output: NodeId,
    pub atop: NodeId,
    /// Driven by `style`, `length` and `composition`
    pub long_shadow: NodeId,
    /// Driven by `style2`; wired only in fading mode
    pub long_shadow_fading: NodeId,
    pub blur: NodeId,
    pub hue_chroma: NodeId,
}

impl LongShadowPdNodes {
    /// The long shadow feeding the compositor for the given mode
    pub fn active(&self, fading: bool) -> NodeId {
        if fading {
            self.long_shadow_fading
        } else {
            self.long_shadow
        }
    }

    pub fn inactive(&self, fading: bool) -> NodeId {
        self.active(!fading)
    }
}

/// The "Extrusion via Long Shadow" meta-operation
#[derive(Debug, Clone, Copy, Default)]
pub struct LongShadowPd;

impl LongShadowPd {
    pub fn new() -> Self {
        Self
    }
}

impl MetaOperation for LongShadowPd {
    type State = LongShadowPdNodes;

    fn keys(&self) -> &OperationKeys {
        &LONG_SHADOW_PD_KEYS
    }

    fn declare(&self) -> ParamSet {
        ParamSet::new(vec![
            ParamSpec::enumeration(
                PARAM_STYLE,
                "Style",
                ShadowStyle::options(),
                ShadowStyle::Finite.nick(),
            )
            .describe("Shadow style")
            .ui_meta("role", ROLE_OUTPUT_EXTENT),
            ParamSpec::enumeration(
                PARAM_STYLE2,
                "Style 2",
                ShadowStyle::options(),
                ShadowStyle::FadingFixedLength.nick(),
            )
            .describe("Shadow style")
            .ui_meta("role", ROLE_OUTPUT_EXTENT),
            ParamSpec::double(PARAM_ANGLE, "Angle", 45.0, -180.0, 180.0)
                .describe("Shadow angle")
                .ui_meta("unit", "degree")
                .ui_meta("direction", "cw"),
            ParamSpec::double(PARAM_LENGTH, "Length", 40.0, 0.0, 55.0)
                .describe("Shadow length")
                .ui_range(0.0, 55.0),
            ParamSpec::enumeration(
                PARAM_COMPOSITION,
                "Composition",
                Composition::options(),
                Composition::ShadowOnly.nick(),
            )
            .describe("Output composition")
            .ui_meta("role", ROLE_OUTPUT_EXTENT),
            ParamSpec::double(
                PARAM_LENGTH_BLUR,
                "Length of Pixel Data colors",
                100.0,
                95.0,
                200.0,
            )
            .describe(
                "Length of blur in pixels. Recommended to keep this over double \
                 the length of the Long Shadow",
            )
            .ui_range(95.0, 200.0)
            .ui_gamma(1.5)
            .ui_meta("unit", "pixel-distance"),
            ParamSpec::boolean(PARAM_FADING_MODE, "Fading Long Shadow mode", false)
                .describe("Enable a Fading Long Shadow"),
            ParamSpec::double(PARAM_CHROMA, "Chroma", 0.0, 0.0, 30.0)
                .describe("Chroma adjustment"),
            ParamSpec::double(PARAM_LIGHTNESS, "Lightness", 0.0, -30.0, 30.0)
                .describe("Lightness adjustment"),
        ])
    }

    fn attach(&self, host: &mut dyn GraphHost) -> Result<Attached<LongShadowPdNodes>> {
        let nodes = LongShadowPdNodes {
            input: host.input_proxy(),
            output: host.output_proxy(),
            atop: host.new_child(OP_SRC_ATOP)?,
            long_shadow: host.new_child(OP_LONG_SHADOW)?,
            long_shadow_fading: host.new_child(OP_LONG_SHADOW)?,
            blur: host.new_child(OP_MOTION_BLUR_LINEAR)?,
            hue_chroma: host.new_child(OP_HUE_CHROMA)?,
        };

        // The fading instance gets its own style and the shared angle only
        let aliases = AliasTable::new()
            .redirect(PARAM_STYLE, nodes.long_shadow, "style")
            .redirect(PARAM_STYLE2, nodes.long_shadow_fading, "style")
            .redirect(PARAM_ANGLE, nodes.long_shadow_fading, "angle")
            .redirect(PARAM_ANGLE, nodes.long_shadow, "angle")
            .redirect(PARAM_LENGTH, nodes.long_shadow, "length")
            .redirect(PARAM_COMPOSITION, nodes.long_shadow, "composition")
            .redirect(PARAM_ANGLE, nodes.blur, "angle")
            .redirect(PARAM_LENGTH_BLUR, nodes.blur, "length")
            .redirect(PARAM_CHROMA, nodes.hue_chroma, "chroma")
            .redirect(PARAM_LIGHTNESS, nodes.hue_chroma, "lightness");

        wire(host, &nodes, false)?;

        Ok(Attached {
            state: nodes,
            aliases,
        })
    }

    fn update(
        &self,
        nodes: &LongShadowPdNodes,
        host: &mut dyn GraphHost,
        params: &ParamSet,
    ) -> Result<()> {
        let fading = params.get_bool(PARAM_FADING_MODE)?;
        debug!(
            "Rewiring long-shadow-pd through {}",
            if fading { "fading long shadow" } else { "long shadow" }
        );
        wire(host, nodes, fading)
    }
}

/// Wire the pipeline through the long shadow selected by `fading`
///
/// The other long shadow is left without an input, so both topologies
/// share every edge except the two touching the active long shadow.
fn wire(host: &mut dyn GraphHost, nodes: &LongShadowPdNodes, fading: bool) -> Result<()> {
    host.disconnect(nodes.inactive(fading), Pad::Input)?;
    link_many(
        host,
        &[
            nodes.input,
            nodes.active(fading),
            nodes.atop,
            nodes.hue_chroma,
            nodes.output,
        ],
    )?;
    link_many(host, &[nodes.input, nodes.blur])?;
    host.connect(nodes.blur, nodes.atop, Pad::Aux)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::CompositeNode;
    use crate::params::ParamValue;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;

    fn attached() -> CompositeNode<LongShadowPd> {
        let mut node = CompositeNode::with_default_library(LongShadowPd::new());
        node.attach().unwrap();
        node
    }

    #[test]
    fn test_defaults() {
        let params = LongShadowPd.declare();
        assert_relative_eq!(params.get_double(PARAM_ANGLE).unwrap(), 45.0);
        assert_relative_eq!(params.get_double(PARAM_LENGTH).unwrap(), 40.0);
        assert_relative_eq!(params.get_double(PARAM_LENGTH_BLUR).unwrap(), 100.0);
        assert!(!params.get_bool(PARAM_FADING_MODE).unwrap());
        assert_relative_eq!(params.get_double(PARAM_CHROMA).unwrap(), 0.0);
        assert_relative_eq!(params.get_double(PARAM_LIGHTNESS).unwrap(), 0.0);
        assert_eq!(params.get_enum(PARAM_COMPOSITION).unwrap(), "shadow-only");
        assert_eq!(params.get_enum(PARAM_STYLE).unwrap(), "finite");
        assert_eq!(params.get_enum(PARAM_STYLE2).unwrap(), "fading-fixed-length");
    }

    #[test]
    fn test_parameter_order() {
        let params = LongShadowPd.declare();
        let names: Vec<&str> = params.specs().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "style",
                "style2",
                "angle",
                "length",
                "composition",
                "lengthblur",
                "ls2",
                "chroma",
                "lightness"
            ]
        );
    }

    #[test]
    fn test_creates_five_children() {
        let node = attached();
        let g = node.graph();
        let n = node.state().unwrap();
        assert_eq!(g.node_count(), 7);
        assert_eq!(g.node_label(n.atop), Some(OP_SRC_ATOP));
        assert_eq!(g.node_label(n.long_shadow), Some(OP_LONG_SHADOW));
        assert_eq!(g.node_label(n.long_shadow_fading), Some(OP_LONG_SHADOW));
        assert_eq!(g.node_label(n.blur), Some(OP_MOTION_BLUR_LINEAR));
        assert_eq!(g.node_label(n.hue_chroma), Some(OP_HUE_CHROMA));
    }

    #[test]
    fn test_default_topology() {
        let node = attached();
        let g = node.graph();
        let n = *node.state().unwrap();

        assert_eq!(
            g.chain_to_output(),
            vec![n.input, n.long_shadow, n.atop, n.hue_chroma, n.output]
        );
        assert_eq!(g.source_of(n.blur, Pad::Input), Some(n.input));
        assert_eq!(g.source_of(n.atop, Pad::Aux), Some(n.blur));
        assert_eq!(g.source_of(n.long_shadow_fading, Pad::Input), None);
        assert_eq!(g.edges().len(), 6);
    }

    #[test]
    fn test_fading_topology() {
        let mut node = attached();
        node.set(PARAM_FADING_MODE, true).unwrap();
        let g = node.graph();
        let n = *node.state().unwrap();

        assert_eq!(
            g.chain_to_output(),
            vec![n.input, n.long_shadow_fading, n.atop, n.hue_chroma, n.output]
        );
        assert_eq!(g.source_of(n.atop, Pad::Aux), Some(n.blur));
        assert_eq!(g.source_of(n.long_shadow, Pad::Input), None);
        assert_eq!(g.edges().len(), 6);
    }

    #[test]
    fn test_alias_targets() {
        let node = attached();
        let n = *node.state().unwrap();
        let aliases = node.aliases().unwrap();

        let angle: Vec<NodeId> = aliases.targets(PARAM_ANGLE).map(|a| a.target).collect();
        assert_eq!(angle, vec![n.long_shadow_fading, n.long_shadow, n.blur]);
        assert_eq!(aliases.targets(PARAM_FADING_MODE).count(), 0);
        assert_eq!(aliases.len(), 10);
    }

    #[test]
    fn test_inactive_long_shadow_receives_angle() {
        let mut node = attached();
        node.set(PARAM_ANGLE, -120.0).unwrap();
        let n = *node.state().unwrap();

        assert_eq!(
            node.graph().param(n.long_shadow_fading, "angle"),
            Some(&ParamValue::Double(-120.0))
        );
        assert_eq!(
            node.graph().source_of(n.long_shadow_fading, Pad::Input),
            None
        );
    }

    #[test]
    fn test_output_extent_params() {
        let node = CompositeNode::with_default_library(LongShadowPd);
        assert_eq!(
            node.output_extent_params(),
            vec!["style", "style2", "composition"]
        );
    }
}
