//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! Leaflet map rendering lives in `assets/js/risk-map.js`, evaluated as
//! globals (no ES modules) and exposed via `window.*`. This module provides
//! safe Rust wrappers that serialize marker data and call those globals.

// Embed the map JS at compile time
static RISK_MAP_JS: &str = include_str!("../assets/js/risk-map.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('IFA JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize the map scripts with a wait-for-Leaflet polling loop.
///
/// The map JS defines `renderRiskMap(...)`/`destroyRiskMap(...)` via
/// `function` declarations. They are evaluated at global scope via indirect
/// eval once Leaflet is ready, then explicitly promoted to `window.*`.
pub fn init_maps() {
    let store_js = format!(
        "window.__ifaMapScripts = {};",
        serde_json::to_string(RISK_MAP_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForLeaflet = setInterval(function() {
                if (typeof L !== 'undefined') {
                    clearInterval(waitForLeaflet);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__ifaMapScripts);
                    delete window.__ifaMapScripts;
                    // Promote function declarations to window explicitly
                    if (typeof renderRiskMap !== 'undefined') window.renderRiskMap = renderRiskMap;
                    if (typeof destroyRiskMap !== 'undefined') window.destroyRiskMap = destroyRiskMap;
                    window.__ifaMapsReady = true;
                    console.log('IFA risk map initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render the risk density map for a normalized marker set.
///
/// Uses a polling loop to wait for Leaflet to load, the map scripts to
/// initialize, and the container DOM element to exist before rendering.
pub fn render_risk_map(container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__ifaMapsReady &&
                    typeof window.renderRiskMap !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderRiskMap('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[IFA] renderRiskMap error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Destroy/clean up the map in the given container.
pub fn destroy_risk_map(container_id: &str) {
    call_js(&format!(
        "if (typeof window.destroyRiskMap !== 'undefined') window.destroyRiskMap('{}');",
        container_id
    ));
}
