//! Widget document assembly.

use super::config::WidgetConfig;
use crate::assets::WidgetAssets;

/// Builds the self-contained HTML document for a widget.
///
/// Asset content is build output and is embedded verbatim. Title and
/// description are metadata only and never appear in the document.
pub fn generate_widget_html(config: &WidgetConfig, assets: &WidgetAssets) -> String {
    format!(
        "<!DOCTYPE html>
<html>
\t<head>
\t\t<style>{globals}</style>
\t\t<style>{styles}</style>
\t</head>
\t<body>
\t\t<div id=\"{root}\"></div>
\t\t<script type=\"module\">{script}</script>
\t</body>
</html>",
        globals = assets.global_styles,
        styles = assets.widget_styles,
        root = config.root_element_id,
        script = assets.widget_script,
    )
}
