//! Global CSS styles for Leadform.
//!
//! Dark zinc surfaces, white primary action, red required marker.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* ZINC (Surfaces, Borders) */
  --zinc-950: #09090b;
  --zinc-900: #18181b;
  --zinc-800: #27272a;
  --zinc-700: #3f3f46;
  --zinc-600: #52525b;
  --zinc-500: #71717a;
  --zinc-400: #a1a1aa;
  --zinc-300: #d4d4d8;
  --zinc-100: #f4f4f5;

  /* TEXT */
  --text-primary: #ffffff;
  --text-secondary: var(--zinc-300);
  --text-muted: var(--zinc-500);

  /* SEMANTIC */
  --danger: #ef4444;
  --success: #22c55e;

  /* Typography */
  --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-2xl: 1.5rem;

  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  background: var(--zinc-950);
  color: var(--text-primary);
  font-family: var(--font-sans);
  font-size: var(--text-base);
  line-height: 1.5;
  min-height: 100vh;
}

/* === Landing === */
.landing {
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 2rem;
}

.landing-header {
  max-width: 560px;
  text-align: center;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
}

.page-title {
  font-size: 2.25rem;
  font-weight: 500;
}

.tagline {
  color: var(--zinc-400);
}

.session-count {
  color: var(--success);
  font-size: var(--text-sm);
}

/* === Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  background: rgba(0, 0, 0, 0.8);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 1000;
  padding: 1.5rem;
  animation: fade-in 150ms ease-out;
}

.dialog-content {
  position: relative;
  width: 100%;
  max-width: 500px;
  max-height: calc(100vh - 3rem);
  overflow-y: auto;
  background: var(--zinc-900);
  border: 1px solid var(--zinc-800);
  border-radius: 0.75rem;
  padding: 1.5rem;
  color: var(--text-primary);
}

.dialog-header {
  display: flex;
  flex-direction: column;
  gap: 0.375rem;
  padding-right: 2rem;
}

.dialog-title {
  font-size: var(--text-2xl);
  font-weight: 500;
}

.dialog-description {
  color: var(--zinc-400);
  font-size: var(--text-sm);
}

.icon-btn {
  background: transparent;
  border: none;
  color: var(--zinc-400);
  cursor: pointer;
  font-size: 1.25rem;
  line-height: 1;
}

.close-btn {
  position: absolute;
  top: 1rem;
  right: 1rem;
}

.close-btn:hover {
  color: var(--text-primary);
}

/* === Form === */
.form {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  margin-top: 1rem;
}

.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.form-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1rem;
}

.input-label {
  color: var(--text-secondary);
  font-size: var(--text-sm);
  font-weight: 500;
}

.required-mark {
  color: var(--danger);
}

.input-field {
  width: 100%;
  padding: 0.5rem 0.75rem;
  background: rgba(39, 39, 42, 0.5);
  border: 1px solid var(--zinc-700);
  border-radius: 0.375rem;
  color: var(--text-primary);
  font-family: inherit;
  font-size: var(--text-sm);
  transition: border-color var(--transition-fast);
}

.input-field::placeholder {
  color: var(--zinc-500);
}

.input-field:focus {
  outline: none;
  border-color: var(--zinc-600);
}

.textarea {
  min-height: 100px;
  resize: vertical;
}

.error-text {
  color: var(--danger);
  font-size: var(--text-sm);
}

.form-actions {
  display: flex;
  gap: 0.75rem;
  padding-top: 1rem;
}

.flex-1 {
  flex: 1;
}

.consent-note {
  color: var(--zinc-500);
  font-size: var(--text-xs);
  text-align: center;
}

/* === Buttons === */
.btn-primary,
.btn-outline {
  padding: 0.5rem 1rem;
  border-radius: 0.375rem;
  font-family: inherit;
  font-size: var(--text-sm);
  font-weight: 500;
  cursor: pointer;
  transition: background var(--transition-fast), color var(--transition-fast);
}

.btn-primary {
  background: #ffffff;
  color: var(--zinc-900);
  border: 1px solid #ffffff;
}

.btn-primary:hover {
  background: var(--zinc-100);
}

.btn-outline {
  background: transparent;
  color: var(--zinc-300);
  border: 1px solid var(--zinc-700);
}

.btn-outline:hover {
  background: var(--zinc-800);
  color: #ffffff;
}

.btn-primary:disabled,
.btn-outline:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.btn-open {
  margin-top: 1rem;
  padding: 0.75rem 1.5rem;
}

/* === Toast === */
.toast {
  position: fixed;
  bottom: 1.5rem;
  right: 1.5rem;
  z-index: 1100;
  display: flex;
  align-items: center;
  gap: 0.5rem;
  max-width: 360px;
  padding: 0.75rem 1rem;
  background: var(--zinc-900);
  border: 1px solid var(--zinc-700);
  border-radius: 0.5rem;
  font-size: var(--text-sm);
  cursor: pointer;
  animation: fade-in 150ms ease-out;
}

.toast-icon {
  color: var(--success);
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

@media (max-width: 560px) {
  .form-grid {
    grid-template-columns: 1fr;
  }
}
"#;
