use crate::core::config::{
    DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, MAX_LENGTH_BOUNDS, MIN_LENGTH_BOUNDS,
};

/// Render the single page: input controls, trigger, notice area, summary
/// display, and the download form. The page posts the form over fetch and
/// fills the hidden download field with the displayed summary, so the
/// downloaded bytes always equal the displayed bytes.
#[must_use]
pub fn render() -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Text Summarizer</title>
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <style>
        body {{ font-family: "Helvetica Neue", Arial, sans-serif; margin: 0; background: #f8fafc; color: #0f172a; }}
        main {{ max-width: 720px; margin: 0 auto; padding: 2rem 1.5rem; box-sizing: border-box; }}
        h1 {{ font-size: 1.6rem; }}
        textarea {{ width: 100%; box-sizing: border-box; min-height: 300px; padding: 0.75rem; border: 1px solid #cbd5e1; border-radius: 8px; font: inherit; }}
        .control {{ margin: 1rem 0; }}
        .control label {{ display: block; font-weight: 600; margin-bottom: 0.3rem; }}
        .control input[type="range"] {{ width: 100%; }}
        button {{ background: #1d4ed8; color: #ffffff; border: none; border-radius: 8px; padding: 0.6rem 1.2rem; font-weight: 600; cursor: pointer; }}
        button:disabled {{ background: #94a3b8; cursor: default; }}
        #notice {{ margin: 1rem 0; padding: 0.75rem 1rem; border-radius: 8px; display: none; }}
        #notice.warning {{ display: block; background: #fef3c7; border: 1px solid #fbbf24; }}
        #notice.info {{ display: block; background: #e0f2fe; border: 1px solid #7dd3fc; }}
        #status {{ margin: 1rem 0; color: #475569; }}
        #summary {{ white-space: pre-wrap; background: #ffffff; border: 1px solid #e2e8f0; border-radius: 8px; padding: 1rem; }}
        #summary-code {{ background: #0f172a; color: #e2e8f0; border-radius: 8px; padding: 1rem; overflow-x: auto; }}
        #result {{ display: none; }}
    </style>
</head>
<body>
<main>
    <h1>Text Summarizer</h1>
    <p>Paste text below and click <strong>Summarize</strong>. The <strong>first run</strong> may take time while the model loads (one-time).</p>
    <form id="summarize-form">
        <div class="control">
            <label for="text">Paste your text here</label>
            <textarea id="text" name="text"></textarea>
        </div>
        <div class="control">
            <label for="min_length">Min tokens in summary: <span id="min_length_value">{min_default}</span></label>
            <input type="range" id="min_length" name="min_length" min="{min_lo}" max="{min_hi}" value="{min_default}">
        </div>
        <div class="control">
            <label for="max_length">Max tokens in summary: <span id="max_length_value">{max_default}</span></label>
            <input type="range" id="max_length" name="max_length" min="{max_lo}" max="{max_hi}" value="{max_default}">
        </div>
        <div class="control">
            <label><input type="checkbox" id="use_fallback" checked> Use fast extractive fallback for very short input</label>
        </div>
        <button type="submit" id="summarize-button">Summarize</button>
    </form>
    <div id="notice"></div>
    <div id="status"></div>
    <section id="result">
        <h2>Summary</h2>
        <div id="summary"></div>
        <form method="post" action="/download">
            <input type="hidden" id="download-summary" name="summary">
            <div class="control"><button type="submit" id="download-button">Download summary (.txt)</button></div>
        </form>
        <pre id="summary-code" hidden><code id="summary-code-text"></code></pre>
    </section>
</main>
<script>
    const form = document.getElementById('summarize-form');
    const noticeEl = document.getElementById('notice');
    const statusEl = document.getElementById('status');
    const resultEl = document.getElementById('result');
    const summaryEl = document.getElementById('summary');
    const codeBlock = document.getElementById('summary-code');
    const codeText = document.getElementById('summary-code-text');
    const downloadInput = document.getElementById('download-summary');
    const summarizeButton = document.getElementById('summarize-button');

    for (const id of ['min_length', 'max_length']) {{
        const slider = document.getElementById(id);
        const value = document.getElementById(id + '_value');
        slider.addEventListener('input', () => {{ value.textContent = slider.value; }});
    }}

    function showNotice(message, kind) {{
        noticeEl.textContent = message;
        noticeEl.className = kind;
    }}

    form.addEventListener('submit', async (event) => {{
        event.preventDefault();
        noticeEl.className = '';
        noticeEl.textContent = '';
        summarizeButton.disabled = true;
        statusEl.textContent = 'Loading model (if first time) and generating summary...';

        const body = new URLSearchParams();
        body.set('text', document.getElementById('text').value);
        body.set('min_length', document.getElementById('min_length').value);
        body.set('max_length', document.getElementById('max_length').value);
        body.set('use_fallback', document.getElementById('use_fallback').checked ? 'true' : 'false');

        try {{
            const response = await fetch('/summarize', {{
                method: 'POST',
                headers: {{ 'Content-Type': 'application/x-www-form-urlencoded' }},
                body,
            }});
            const data = await response.json();
            if (!response.ok) {{
                showNotice(data.error, 'warning');
                return;
            }}
            if (data.notice) {{
                showNotice(data.notice, 'info');
            }}
            summaryEl.textContent = data.summary;
            downloadInput.value = data.summary;
            resultEl.style.display = 'block';
            const isModel = data.method === 'model';
            codeBlock.hidden = !isModel;
            codeText.textContent = isModel ? data.summary : '';
        }} catch (err) {{
            showNotice('Request failed: ' + err, 'warning');
        }} finally {{
            summarizeButton.disabled = false;
            statusEl.textContent = '';
        }}
    }});
</script>
</body>
</html>
"#,
        min_lo = MIN_LENGTH_BOUNDS.0,
        min_hi = MIN_LENGTH_BOUNDS.1,
        min_default = DEFAULT_MIN_LENGTH,
        max_lo = MAX_LENGTH_BOUNDS.0,
        max_hi = MAX_LENGTH_BOUNDS.1,
        max_default = DEFAULT_MAX_LENGTH,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_has_all_controls() {
        let html = render();
        assert!(html.contains(r#"<textarea id="text" name="text">"#));
        assert!(html.contains(r#"name="min_length" min="5" max="100" value="20""#));
        assert!(html.contains(r#"name="max_length" min="20" max="200" value="80""#));
        assert!(html.contains(r#"id="use_fallback" checked"#));
        assert!(html.contains(">Summarize</button>"));
        assert!(html.contains(">Download summary (.txt)</button>"));
    }

    #[test]
    fn test_download_form_posts_the_displayed_summary() {
        let html = render();
        assert!(html.contains(r#"action="/download""#));
        assert!(html.contains(r#"name="summary""#));
        assert!(html.contains("downloadInput.value = data.summary"));
        assert!(html.contains("summaryEl.textContent = data.summary"));
    }
}
