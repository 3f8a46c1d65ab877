// Server-rendered copy form
use crate::domain::status::CopyStatus;
use minijinja::{context, Environment};
use serde::Serialize;

/// Values echoed back into the form. The password is deliberately absent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FormValues {
    pub base_url: String,
    pub username: String,
    pub dashboard_id: String,
    pub copy_title: String,
}

#[derive(Debug, Serialize)]
struct BannerView {
    tone: &'static str,
    text: String,
}

// The .html suffix turns on minijinja's HTML autoescaping
const PAGE_TEMPLATE_NAME: &str = "copy_form.html";

const PAGE_TEMPLATE: &str = r#"{% macro field(label, name, kind, value="") -%}
<div><label for="{{ name }}">{{ label }}</label><input id="{{ name }}" name="{{ name }}" type="{{ kind }}" value="{{ value }}"></div>
{%- endmacro -%}
<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Superset Dashboard Copier</title>
<style>
body { margin: 0; min-height: 100vh; display: flex; align-items: center; justify-content: center;
       background: #f9fafb; font-family: system-ui, sans-serif; padding: 0 1rem; }
.card { background: #fff; border-radius: 1rem; box-shadow: 0 10px 25px rgba(0,0,0,.1);
        padding: 2rem; width: 100%; max-width: 36rem; }
h1 { font-size: 1.5rem; color: #1f2937; text-align: center; margin: 0 0 1.5rem; }
label { display: block; font-size: .875rem; font-weight: 500; color: #374151; margin-bottom: .25rem; }
input { width: 100%; box-sizing: border-box; border: 1px solid #d1d5db; border-radius: .5rem;
        padding: .5rem .75rem; margin-bottom: 1rem; }
button { width: 100%; background: #16a34a; color: #fff; font-weight: 500; border: 0;
         border-radius: .5rem; padding: .5rem 1rem; cursor: pointer; }
button:hover { background: #15803d; }
button:disabled { opacity: .6; cursor: wait; }
.banner { margin-top: 1rem; font-size: .875rem; padding: .75rem; border-radius: .5rem; }
.banner.success { background: #dcfce7; color: #166534; }
.banner.error { background: #fee2e2; color: #991b1b; }
</style>
</head>
<body>
<div class="card">
<h1>Superset Dashboard Copier</h1>
<form method="post" action="/copy" onsubmit="var b=this.querySelector('button');b.disabled=true;b.textContent='Copying...';">
{{ field("Superset Base URL", "base_url", "text", form.base_url) }}
{{ field("Username", "username", "text", form.username) }}
{{ field("Password", "password", "password") }}
{{ field("Dashboard ID to Copy", "dashboard_id", "text", form.dashboard_id) }}
{{ field("New Dashboard Title", "copy_title", "text", form.copy_title) }}
<button type="submit">Copy Dashboard</button>
</form>
{% if banner %}<div class="banner {{ banner.tone }}" role="status">{{ banner.text }}</div>{% endif %}
</div>
</body>
</html>
"#;

pub fn render_page(
    values: &FormValues,
    status: Option<&CopyStatus>,
) -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)?;

    let banner = status.map(|s| BannerView {
        tone: if s.is_success() { "success" } else { "error" },
        text: s.banner(),
    });

    env.get_template(PAGE_TEMPLATE_NAME)?
        .render(context! { form => values, banner => banner })
}
