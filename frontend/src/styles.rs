/// Page-wide rules: palette, typography, section spacing, buttons and the
/// reveal transition. Section-specific rules live next to each component.
pub const BASE_CSS: &str = r#"
:root {
    --primary: #e85d3a;
    --secondary: #2f6fed;
    --accent: #12a77a;
    --foreground: #16181d;
    --muted: #6b7280;
    --background: #ffffff;
    --light: #f6f5f2;
    --border: #e5e7eb;
}

* { box-sizing: border-box; }

html { scroll-behavior: smooth; }

body {
    margin: 0;
    font-family: 'Inter', system-ui, sans-serif;
    color: var(--foreground);
    background: var(--background);
}

.container {
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 1.5rem;
}

.section {
    padding: 6rem 0;
}

.section.light {
    background: var(--light);
}

.section-label {
    display: inline-flex;
    align-items: center;
    gap: 0.75rem;
    font-size: 0.8rem;
    letter-spacing: 0.15em;
    text-transform: uppercase;
    color: var(--primary);
    margin-bottom: 1rem;
}

.section-label::before {
    content: "";
    width: 2rem;
    height: 2px;
    background: var(--primary);
}

.section-title {
    font-size: clamp(2rem, 4vw, 3rem);
    margin: 0 0 1rem;
}

.section-title em {
    color: var(--primary);
}

.section-lead {
    color: var(--muted);
    max-width: 40rem;
    line-height: 1.7;
}

.btn {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.9rem 2rem;
    border-radius: 999px;
    border: 2px solid transparent;
    font-weight: 600;
    cursor: pointer;
    text-decoration: none;
    transition: transform 0.2s ease, background 0.2s ease;
}

.btn:hover { transform: translateY(-2px); }
.btn:disabled { opacity: 0.6; cursor: not-allowed; transform: none; }
.btn-primary { background: var(--primary); color: #fff; }
.btn-outline { border-color: var(--foreground); color: var(--foreground); background: transparent; }

.tone-primary { --tone: var(--primary); }
.tone-secondary { --tone: var(--secondary); }
.tone-accent { --tone: var(--accent); }

.reveal {
    opacity: 0;
    transform: translateY(40px);
    transition: opacity 0.7s ease-out, transform 0.7s ease-out;
}

.reveal.revealed {
    opacity: 1;
    transform: none;
}

.card-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
    gap: 1.5rem;
}

.card {
    padding: 1.5rem;
    border: 1px solid var(--border);
    border-radius: 1rem;
    background: var(--background);
}

.field-error {
    color: #dc2626;
    font-size: 0.8rem;
    margin-top: 0.25rem;
}

@media (max-width: 768px) {
    .section { padding: 4rem 0; }
}
"#;
