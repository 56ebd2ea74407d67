//! HTML rendering for the policy demo landing page.
//!
//! Pure templating: every interpolated value is escaped for its position
//! (text node or double-quoted attribute).

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::policy::identity::ProcessIdentity;

const INDEX_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Guardian Demo - Container Security</title>
    <style>
        body { font-family: Arial, sans-serif; margin: 40px; background: #1a1a2e; color: #eee; }
        .container { max-width: 800px; margin: 0 auto; }
        .header { text-align: center; margin-bottom: 40px; }
        .status { background: #16213e; padding: 20px; border-radius: 8px; margin: 20px 0; }
        .guardian { color: #0f4c75; font-weight: bold; }
        .secure { color: #4ade80; }
        .warning { color: #fbbf24; }
        .danger { color: #ef4444; }
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>🚀 Guardians of the Container Galaxy</h1>
            <h2>Security Policy Demo Application</h2>
        </div>

        <div class="status">
            <h3>Container Security Status</h3>
            <p><strong>Guardian:</strong> <span class="guardian">Star-Lord (Policy Orchestration)</span></p>
            <p><strong>User ID:</strong> <span class="%USER_CLASS%">%USER_ID%</span></p>
            <p><strong>Root Access:</strong> <span class="%ROOT_CLASS%">%ROOT_STATUS%</span></p>
            <p><strong>Timestamp:</strong> %TIMESTAMP%</p>
        </div>

        <div class="status">
            <h3>Security Principles</h3>
            <ul>
                <li>✅ Non-root container execution</li>
                <li>✅ Signed image verification</li>
                <li>✅ Admission policy enforcement</li>
                <li>✅ Runtime security monitoring</li>
            </ul>
        </div>

        <div class="status">
            <h3>API Endpoints</h3>
            <p><strong>Health Check:</strong> <a href="/health">/health</a></p>
            <p><strong>Home:</strong> <a href="/">/</a></p>
        </div>
    </div>
</body>
</html>
"#;

/// Render the landing page for `identity` at `timestamp`.
pub fn render_index(identity: &ProcessIdentity, timestamp: &str) -> String {
    let class = encode_double_quoted_attribute(identity.css_class());
    INDEX_TEMPLATE
        .replace("%USER_CLASS%", &class)
        .replace("%ROOT_CLASS%", &class)
        .replace("%USER_ID%", &encode_text(&identity.user_id.to_string()))
        .replace("%ROOT_STATUS%", &encode_text(identity.root_status()))
        .replace("%TIMESTAMP%", &encode_text(timestamp))
}
