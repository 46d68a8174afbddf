//! Global CSS styles for Orbitdeck.
//!
//! Mission-control aesthetic: white cards on pale slate, steel blue
//! accents, green/red status icons.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* GROUND (Backgrounds) */
  --ground: #f4f6f8;
  --card: #ffffff;
  --card-inset: #f1f3f5;
  --border: #e2e6ea;

  /* INK (Text) */
  --ink: #1d242b;
  --ink-soft: #5b6672;
  --ink-faint: #8b949e;

  /* ACCENT */
  --accent: #2d6cdf;
  --accent-deep: #1d4fa8;

  /* STATUS */
  --go: #1e9e50;
  --no-go: #d6403a;

  /* Typography */
  --font-sans: 'Oswald', 'Inter', 'Segoe UI', sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Type Scale */
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.4rem;
  --text-2xl: 1.9rem;

  /* Transitions */
  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--ground);
  color: var(--ink);
  line-height: 1.6;
  min-height: 100vh;
}

/* === Navigation Header === */
.nav-header {
  background: var(--card);
  border-bottom: 1px solid var(--border);
  margin-bottom: 1.5rem;
}

.nav-header-inner {
  max-width: 1200px;
  margin: 0 auto;
  padding: 0.75rem 1rem;
  display: flex;
  align-items: baseline;
  gap: 1.25rem;
}

.nav-title {
  font-size: var(--text-lg);
  font-weight: 700;
  letter-spacing: 0.04em;
  text-transform: uppercase;
  color: var(--accent-deep);
  text-decoration: none;
}

.nav-title:hover {
  color: var(--accent);
}

.nav-heading {
  font-size: var(--text-2xl);
  font-weight: 700;
}

/* === Home === */
.home {
  max-width: 640px;
  margin: 0 auto;
  padding: 4rem 1rem;
}

.home-header {
  text-align: center;
  margin-bottom: 2.5rem;
}

.page-title {
  font-size: 3rem;
  font-weight: 700;
  letter-spacing: 0.06em;
  text-transform: uppercase;
  color: var(--accent-deep);
}

.tagline {
  color: var(--ink-soft);
  margin-top: 0.5rem;
}

.home-open {
  background: var(--card);
  border: 1px solid var(--border);
  border-radius: 0.5rem;
  box-shadow: 0 2px 8px rgba(29, 36, 43, 0.06);
  padding: 1.5rem;
}

.id-input {
  width: 100%;
  margin-top: 1rem;
  padding: 0.6rem 0.75rem;
  font-family: var(--font-mono);
  font-size: var(--text-sm);
  border: 1px solid var(--border);
  border-radius: 0.375rem;
  color: var(--ink);
}

.id-input:focus {
  outline: 2px solid var(--accent);
  outline-offset: -1px;
}

.home-actions {
  display: flex;
  gap: 0.75rem;
  margin-top: 1rem;
}

.open-btn {
  flex: 1;
  padding: 0.55rem 0.75rem;
  font-family: inherit;
  font-size: var(--text-sm);
  font-weight: 600;
  color: var(--card);
  background: var(--accent);
  border: none;
  border-radius: 0.375rem;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.open-btn:hover {
  background: var(--accent-deep);
}

.home-hint {
  margin-top: 1.25rem;
  font-size: var(--text-sm);
  color: var(--ink-soft);
}

.inline-link {
  color: var(--accent);
  text-decoration: none;
}

.inline-link:hover {
  text-decoration: underline;
}

/* === Loading State === */
.loading-state {
  display: flex;
  justify-content: center;
  align-items: center;
  height: 100vh;
}

.loading-spinner {
  width: 3rem;
  height: 3rem;
  border: 4px solid var(--border);
  border-top-color: var(--ink);
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Error Page === */
.error-page {
  display: flex;
  justify-content: center;
  align-items: center;
  height: 100vh;
}

.error-card {
  background: var(--card);
  border: 1px solid var(--border);
  border-radius: 0.5rem;
  box-shadow: 0 2px 8px rgba(29, 36, 43, 0.06);
  padding: 3rem 4rem;
  text-align: center;
}

.error-code {
  font-size: 4rem;
  font-weight: 700;
  color: var(--no-go);
}

.error-text {
  font-size: var(--text-xl);
  color: var(--ink-soft);
  margin-bottom: 1.5rem;
}

/* === Detail Layout === */
.detail-page {
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 1rem 3rem;
}

.detail-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 1rem;
  align-items: start;
}

.detail-grid > .webcast-card {
  grid-column: span 2;
}

.detail-column {
  display: grid;
  grid-template-columns: 1fr;
  gap: 1rem;
}

@media (max-width: 900px) {
  .detail-grid {
    grid-template-columns: 1fr;
  }
  .detail-grid > .webcast-card {
    grid-column: span 1;
  }
}

/* === Section Cards === */
.section-card {
  background: var(--card);
  border: 1px solid var(--border);
  border-radius: 0.5rem;
  box-shadow: 0 2px 8px rgba(29, 36, 43, 0.06);
  overflow: hidden;
  padding: 1.5rem;
}

.section-title {
  font-size: var(--text-xl);
  font-weight: 600;
  margin-bottom: 0.75rem;
}

.card-title-link {
  color: inherit;
  text-decoration: none;
  width: fit-content;
  display: inline-block;
}

.card-title-link:hover {
  color: var(--accent);
}

.card-title-link:hover .rail-card-title {
  text-decoration: underline;
}

.card-media-row {
  display: flex;
  align-items: center;
  gap: 1rem;
  margin-top: 0.5rem;
}

/* === Field Rows === */
.field-row {
  color: var(--ink-soft);
  margin: 0.15rem 0;
  display: flex;
  align-items: center;
  flex-wrap: wrap;
  gap: 0.25rem;
}

.field-label {
  color: var(--ink-soft);
}

.field-value {
  color: var(--ink);
}

.details-text {
  margin-top: 1rem;
  color: var(--ink);
}

/* === Status Icons === */
.status-icon {
  display: inline-flex;
  align-items: center;
}

.status-icon.affirmative {
  color: var(--go);
}

.status-icon.negative {
  color: var(--no-go);
}

/* === Images === */
.image-frame {
  display: block;
  object-fit: cover;
  background: var(--card-inset);
  border-radius: 0.375rem;
}

.image-frame--empty {
  display: flex;
  align-items: center;
  justify-content: center;
  color: var(--ink-faint);
}

.image-frame__glyph {
  font-size: 2rem;
}

.card-patch {
  width: 10rem;
  height: 10rem;
  flex-shrink: 0;
}

.card-photo {
  width: 8rem;
  height: 8rem;
  flex-shrink: 0;
}

.card-photo-wide {
  width: 18rem;
  height: 12rem;
  flex-shrink: 0;
}

/* === External Links === */
.link-row {
  display: flex;
  gap: 1rem;
  margin-top: 1rem;
}

.external-link {
  display: inline-block;
  padding: 0.4rem 0.9rem;
  border: 1px solid var(--border);
  border-radius: 0.375rem;
  color: var(--accent);
  text-decoration: none;
  font-size: var(--text-sm);
  transition: border-color var(--transition-fast);
}

.external-link:hover {
  border-color: var(--accent);
  text-decoration: underline;
}

.ship-link {
  margin-top: 0.5rem;
}

/* === Card Rails === */
.card-rail {
  display: flex;
  gap: 1rem;
  overflow-x: auto;
  padding-bottom: 0.5rem;
}

.rail-card {
  background: var(--card-inset);
  border-radius: 0.5rem;
  padding: 1rem;
  min-width: 15rem;
  flex-shrink: 0;
}

.rail-card-title {
  font-size: var(--text-lg);
  font-weight: 600;
  margin-bottom: 0.5rem;
}

/* === Failures === */
.failure-list {
  display: grid;
  gap: 0.75rem;
  max-height: 18rem;
  overflow-y: auto;
}

.failure-entry {
  background: var(--card-inset);
  border-radius: 0.5rem;
  padding: 1rem;
}

/* === Ship Launch History === */
.launch-grid {
  list-style: none;
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 1rem;
}

@media (max-width: 1000px) {
  .launch-grid {
    grid-template-columns: 1fr;
  }
}

.launch-entry {
  background: var(--card-inset);
  border-radius: 0.5rem;
  padding: 1rem;
  display: grid;
  grid-template-columns: 1fr auto;
  gap: 1rem;
}

/* === Role Badges === */
.role-badges {
  list-style: none;
  display: flex;
  flex-wrap: wrap;
  gap: 0.4rem;
}

.role-badge {
  background: var(--accent);
  color: var(--card);
  border-radius: 9999px;
  padding: 0.15rem 0.75rem;
  font-size: var(--text-sm);
  font-weight: 600;
}

/* === Webcast === */
.webcast-card {
  padding: 0.75rem;
}

.webcast-frame {
  width: 100%;
  aspect-ratio: 16 / 9;
  border: none;
  border-radius: 0.375rem;
}
"#;
