/// Width below which the layout collapses to a single column and wide
/// metric grids fall back to their narrow column count.
pub const NARROW_BREAKPOINT_PX: u32 = 640;

pub const STYLESHEET: &str = r#"
:root {
  --bg: #ffffff;
  --text: #0f172a;
  --text-dim: #475569;
  --muted: #64748b;
  --border: #e2e8f0;
  --panel: rgba(248, 250, 252, 0.7);
  --accent: #059669;
  --accent-strong: #047857;
  --accent-soft: #ecfdf5;
  --radius: 16px;
  --radius-pill: 999px;
  --font-body: "Inter", system-ui, -apple-system, sans-serif;
}

@media (prefers-color-scheme: dark) {
  :root {
    --bg: #020617;
    --text: #f1f5f9;
    --text-dim: #cbd5e1;
    --muted: #94a3b8;
    --border: #1e293b;
    --panel: rgba(15, 23, 42, 0.6);
    --accent-soft: rgba(6, 78, 59, 0.3);
  }
}

* { box-sizing: border-box; }
body { margin: 0; min-height: 100vh; background: var(--bg); color: var(--text); font-family: var(--font-body); -webkit-font-smoothing: antialiased; }
a { color: inherit; }

.page { display: grid; gap: 40px; max-width: 72rem; margin: 0 auto; padding: 24px; grid-template-columns: 320px 1fr; }
.sidebar { position: sticky; top: 32px; align-self: start; }
.content { display: flex; flex-direction: column; gap: 48px; }
.panel { border: 1px solid var(--border); border-radius: var(--radius); background: var(--panel); padding: 24px; }

.identity { display: flex; align-items: center; gap: 16px; }
.avatar { display: grid; place-items: center; width: 56px; height: 56px; border-radius: 50%; background: var(--accent); color: #fff; font-weight: 700; }
.identity__name { margin: 0; font-size: 1.25rem; font-weight: 800; }
.identity__tagline, .summary { color: var(--text-dim); font-size: 0.875rem; line-height: 1.5rem; }

.button { display: inline-block; border-radius: 6px; padding: 8px 16px; font-size: 0.875rem; font-weight: 600; text-decoration: none; border: 1px solid var(--border); }
.button--primary { background: var(--accent); border-color: var(--accent); color: #fff; }
.button--primary:hover { background: var(--accent-strong); }
.actions { display: flex; flex-wrap: wrap; gap: 12px; margin-top: 16px; }

.track { margin-top: 24px; }
.track__caption { display: block; margin-bottom: 8px; font-size: 0.75rem; font-weight: 600; text-transform: uppercase; letter-spacing: 0.05em; color: var(--muted); }
.track__controls { display: inline-flex; border: 1px solid var(--border); border-radius: var(--radius-pill); padding: 4px; }
.track__control { padding: 4px 12px; border-radius: var(--radius-pill); font-size: 0.75rem; font-weight: 500; text-decoration: none; }
.track__control--active { background: var(--accent-soft); color: var(--accent-strong); }
.skills { list-style: none; margin: 12px 0 0; padding: 0; display: flex; flex-direction: column; gap: 8px; }
.skill { border: 1px solid var(--border); border-radius: 8px; padding: 8px 12px; font-size: 0.875rem; }

.socials { display: flex; gap: 12px; margin-top: 24px; font-size: 0.875rem; }

.hero { border: 1px solid var(--border); border-radius: var(--radius); padding: 32px; background: linear-gradient(to right, var(--accent-soft), var(--bg)); }
.hero__headline { margin: 0; font-size: 2.25rem; font-weight: 900; }
.section__title { margin: 0; font-size: 1.5rem; font-weight: 700; }
.section__lede { margin-top: 4px; font-size: 0.875rem; color: var(--text-dim); }

.cards { display: flex; flex-direction: column; gap: 20px; margin-top: 24px; }
.card { border: 1px solid var(--border); border-left: 4px solid var(--accent); border-radius: var(--radius); padding: 24px; }
.card__title { margin: 0; font-size: 1.125rem; font-weight: 600; }
.card__badge { margin-left: 8px; border-radius: var(--radius-pill); padding: 2px 8px; font-size: 0.75rem; background: var(--accent-soft); color: var(--accent-strong); }
.card__tags { display: flex; flex-wrap: wrap; gap: 8px; margin-top: 12px; }
.tag { border: 1px solid var(--border); border-radius: var(--radius-pill); padding: 2px 8px; font-size: 0.75rem; color: var(--text-dim); }
.card__links { display: flex; flex-wrap: wrap; gap: 16px; margin-top: 16px; }
.card__link { font-size: 0.875rem; font-weight: 500; color: var(--accent-strong); text-decoration: none; }
.card__link--primary { font-weight: 700; }
.card__note { margin-top: 12px; font-size: 0.75rem; color: var(--muted); }

.metrics { display: grid; gap: 8px; margin-top: 16px; }
.metrics--cols-2 { grid-template-columns: repeat(2, minmax(0, 1fr)); }
.metrics--cols-3 { grid-template-columns: repeat(3, minmax(0, 1fr)); }
.metrics--cols-4 { grid-template-columns: repeat(4, minmax(0, 1fr)); }
.metric { position: relative; border: 1px solid var(--border); border-radius: 10px; padding: 8px 12px; }
.metric__value { display: block; font-size: 1rem; font-weight: 700; }
.metric__label { display: block; font-size: 0.75rem; color: var(--muted); }
.metric__tip { visibility: hidden; position: absolute; left: 0; bottom: 100%; z-index: 10; padding: 4px 8px; border-radius: 6px; background: var(--text); color: var(--bg); font-size: 0.75rem; }
.metric:hover .metric__tip, .metric:focus .metric__tip, .metric:focus-within .metric__tip { visibility: visible; }

.entries { list-style: none; margin: 16px 0 0; padding: 0; display: flex; flex-direction: column; gap: 12px; }
.entry__title { font-weight: 600; }
.entry__meta { font-size: 0.875rem; color: var(--text-dim); }

.contact { text-align: center; }
.footer { border-top: 1px solid var(--border); padding: 24px 0; text-align: center; font-size: 0.75rem; color: var(--muted); }

@media (max-width: 640px) {
  .page { grid-template-columns: 1fr; }
  .sidebar { position: static; }
  .metrics--narrow-2 { grid-template-columns: repeat(2, minmax(0, 1fr)); }
}
"#;
