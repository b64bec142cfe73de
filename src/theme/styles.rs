//! Global CSS styles for the storefront.
//!
//! Light retail palette: warm neutrals with a single accent color.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --surface: #ffffff;
  --surface-muted: #f6f4f1;
  --surface-sunken: #ece8e2;
  --border: #ddd7cf;

  /* Text */
  --text-primary: #1d1b19;
  --text-secondary: #5c5650;
  --text-muted: #8f877e;
  --text-inverse: #ffffff;

  /* Accent */
  --accent: #c2410c;
  --accent-hover: #9a3412;
  --accent-soft: rgba(194, 65, 12, 0.12);

  /* Semantic */
  --success: #15803d;
  --danger: #b91c1c;
  --warning: #b45309;

  /* Typography */
  --font-sans: 'Inter', 'Helvetica Neue', Arial, sans-serif;
  --font-serif: 'Playfair Display', Georgia, serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-3xl: 3rem;

  --radius: 10px;
  --shadow: 0 2px 12px rgba(0, 0, 0, 0.08);

  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  background: var(--surface-muted);
  color: var(--text-primary);
  font-family: var(--font-sans);
  font-size: var(--text-base);
  line-height: 1.5;
  -webkit-font-smoothing: antialiased;
}

a {
  color: inherit;
  text-decoration: none;
}

code {
  font-family: var(--font-mono);
  font-size: var(--text-sm);
  background: var(--surface-sunken);
  padding: 0.1rem 0.35rem;
  border-radius: 4px;
  word-break: break-all;
}

/* === Layout === */
.page {
  max-width: 1100px;
  margin: 0 auto;
  padding: 1.5rem 2rem 4rem;
  display: flex;
  flex-direction: column;
  gap: 2rem;
}

.page-title {
  font-family: var(--font-serif);
  font-size: var(--text-2xl);
}

.section-header {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  font-weight: 600;
}

/* === Navigation === */
.nav-header {
  position: sticky;
  top: 0;
  z-index: 10;
  display: flex;
  align-items: center;
  gap: 2rem;
  padding: 1rem 2rem;
  background: var(--surface);
  border-bottom: 1px solid var(--border);
}

.nav-brand {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  font-weight: 700;
  letter-spacing: 0.02em;
}

.nav-links {
  display: flex;
  gap: 1.25rem;
  flex: 1;
}

.nav-link {
  color: var(--text-secondary);
  padding-bottom: 2px;
  border-bottom: 2px solid transparent;
  transition: color var(--transition-fast), border-color var(--transition-fast);
}

.nav-link:hover {
  color: var(--text-primary);
}

.nav-link.active {
  color: var(--text-primary);
  border-bottom-color: var(--accent);
}

.nav-badge {
  font-size: var(--text-xs);
  text-transform: uppercase;
  letter-spacing: 0.06em;
  padding: 0.2rem 0.6rem;
  border-radius: 999px;
}

.nav-badge--warning {
  color: var(--warning);
  background: rgba(180, 83, 9, 0.1);
  border: 1px solid rgba(180, 83, 9, 0.3);
}

/* === Hero === */
.hero {
  min-height: 340px;
  border-radius: var(--radius);
  background-color: var(--surface-sunken);
  background-size: cover;
  background-position: center;
  display: flex;
  align-items: flex-end;
  overflow: hidden;
}

.hero__content {
  width: 100%;
  padding: 2.5rem;
  background: linear-gradient(transparent, rgba(0, 0, 0, 0.55));
  color: var(--text-inverse);
  display: flex;
  flex-direction: column;
  align-items: flex-start;
  gap: 0.75rem;
}

.hero__title {
  font-family: var(--font-serif);
  font-size: var(--text-3xl);
  line-height: 1.1;
}

.hero__tagline {
  font-size: var(--text-lg);
  opacity: 0.9;
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  padding: 0.6rem 1.25rem;
  font: inherit;
  font-weight: 600;
  border-radius: var(--radius);
  border: 1px solid transparent;
  cursor: pointer;
  transition: background var(--transition-fast), color var(--transition-fast), border-color var(--transition-fast);
}

.btn:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.btn.wide {
  width: 100%;
}

.btn-primary {
  background: var(--accent);
  color: var(--text-inverse);
}

.btn-primary:hover:not(:disabled) {
  background: var(--accent-hover);
}

.btn-outline {
  background: transparent;
  color: var(--text-primary);
  border-color: var(--border);
}

.btn-outline:hover:not(:disabled) {
  border-color: var(--text-primary);
}

.btn-ghost {
  background: transparent;
  color: var(--text-secondary);
}

.btn-ghost:hover:not(:disabled) {
  color: var(--text-primary);
  background: var(--surface-sunken);
}

.btn-spinner {
  width: 14px;
  height: 14px;
  border: 2px solid currentColor;
  border-right-color: transparent;
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}

.close-btn {
  background: none;
  border: none;
  color: var(--text-muted);
  font-size: var(--text-lg);
  cursor: pointer;
  line-height: 1;
}

.close-btn:hover {
  color: var(--text-primary);
}

/* === Inputs === */
.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.35rem;
}

.input-label {
  font-size: var(--text-sm);
  font-weight: 600;
  color: var(--text-secondary);
}

.input-field {
  width: 100%;
  padding: 0.65rem 0.9rem;
  font: inherit;
  color: var(--text-primary);
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.input-field:focus {
  outline: none;
  border-color: var(--accent);
  box-shadow: 0 0 0 3px var(--accent-soft);
}

.input-field--invalid {
  border-color: var(--danger);
}

.input-error {
  font-size: var(--text-sm);
  color: var(--danger);
}

/* === Search === */
.shop-search {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.search-input-wrapper {
  position: relative;
}

.search-icon {
  position: absolute;
  left: 0.9rem;
  top: 50%;
  transform: translateY(-50%);
  color: var(--text-muted);
  pointer-events: none;
}

.search-input {
  padding-left: 2.5rem;
}

.shop-search__share {
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

/* === Category Grid === */
.category-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
  gap: 1.25rem;
}

.category-grid__empty {
  color: var(--text-muted);
  padding: 2rem 0;
  text-align: center;
}

.category-tile {
  display: flex;
  flex-direction: column;
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  overflow: hidden;
  cursor: pointer;
  text-align: left;
  font: inherit;
  padding: 0;
  transition: transform var(--transition-fast), box-shadow var(--transition-fast);
}

.category-tile:hover {
  transform: translateY(-2px);
  box-shadow: var(--shadow);
}

.category-tile__img,
.category-tile__placeholder {
  width: 100%;
  aspect-ratio: 1 / 1;
  object-fit: cover;
  background: var(--surface-sunken);
}

.category-tile__name {
  padding: 0.75rem 1rem;
  font-weight: 600;
}

/* === Image Upload === */
.image-upload {
  display: flex;
  flex-direction: column;
  gap: 0.6rem;
}

.image-upload__header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 0.5rem;
}

.image-upload__label {
  font-weight: 600;
}

.image-upload__badge {
  font-size: var(--text-xs);
  color: var(--warning);
  border: 1px solid rgba(180, 83, 9, 0.3);
  border-radius: 999px;
  padding: 0.1rem 0.5rem;
}

.image-upload__frame {
  position: relative;
  width: 100%;
  background: var(--surface-sunken);
  border: 1px dashed var(--border);
  border-radius: var(--radius);
  overflow: hidden;
}

.image-upload__img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  display: block;
}

.image-upload__img--dim {
  opacity: 0.4;
}

.image-upload__empty {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  color: var(--text-muted);
  font-size: var(--text-sm);
}

.image-upload__overlay {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(255, 255, 255, 0.5);
}

.loading-spinner {
  width: 32px;
  height: 32px;
  border: 3px solid var(--border);
  border-top-color: var(--accent);
  border-radius: 50%;
  animation: spin 0.9s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Admin === */
.admin {
  display: flex;
  flex-direction: column;
  gap: 2rem;
}

.admin__header {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.admin__notice {
  color: var(--warning);
  font-size: var(--text-sm);
}

.admin__section {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.admin__grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
  gap: 1.25rem;
}

.admin__actions {
  display: flex;
  justify-content: flex-end;
  gap: 0.75rem;
}

/* === Newsletter === */
.newsletter {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 2rem;
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.newsletter__row {
  display: flex;
  align-items: flex-start;
  gap: 0.75rem;
}

.newsletter__row .form-field {
  flex: 1;
}

.body-text {
  color: var(--text-secondary);
}

/* === Toasts === */
.toast-stack {
  position: fixed;
  right: 1.5rem;
  bottom: 1.5rem;
  z-index: 100;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  width: 320px;
}

.toast {
  display: flex;
  align-items: flex-start;
  gap: 0.75rem;
  padding: 0.9rem 1rem;
  background: var(--surface);
  border-radius: var(--radius);
  box-shadow: var(--shadow);
  border-left: 4px solid var(--border);
  animation: toast-in var(--transition-normal);
}

.toast--success {
  border-left-color: var(--success);
}

.toast--failure {
  border-left-color: var(--danger);
}

.toast__body {
  flex: 1;
}

.toast__title {
  font-weight: 600;
}

.toast__description {
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

@keyframes toast-in {
  from { opacity: 0; transform: translateY(8px); }
  to { opacity: 1; transform: translateY(0); }
}
"#;
