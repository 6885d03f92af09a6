//! Global CSS styles for the deposit guide.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --bg: #0B0E14;
  --card: #161B22;
  --border: #1e293b;
  --border-hover: #334155;

  --gold-light: #F9F1D8;
  --gold: #D4AF37;
  --gold-glow: rgba(212, 175, 55, 0.3);

  --text-primary: #FFFFFF;
  --text-body: #e2e8f0;
  --text-secondary: #8B949E;
  --text-muted: #94a3b8;

  --usdt-green: #26A17B;
  --danger: #ef4444;
  --danger-soft: rgba(239, 68, 68, 0.8);
  --danger-border: rgba(127, 29, 29, 0.5);

  --font-sans: system-ui, -apple-system, 'PingFang TC', 'Microsoft JhengHei', sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  min-height: 100vh;
  background: var(--bg);
  color: var(--text-body);
  font-family: var(--font-sans);
  line-height: 1.6;
}

.guide {
  min-height: 100vh;
  background: var(--bg);
}

.gold-gradient {
  background: linear-gradient(to right, var(--gold-light), var(--gold));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

/* === Hero === */
.hero {
  position: relative;
  padding: 6rem 1rem;
  overflow: hidden;
  border-bottom: 1px solid var(--border);
}

.hero-dots {
  position: absolute;
  inset: 0;
  opacity: 0.2;
  background-image: radial-gradient(var(--gold) 0.5px, transparent 0.5px);
  background-size: 40px 40px;
}

.hero-inner {
  position: relative;
  z-index: 1;
  max-width: 72rem;
  margin: 0 auto;
  text-align: center;
}

.hero-badge {
  display: inline-block;
  margin-bottom: 2rem;
  padding: 1.25rem;
  border-radius: 1.5rem;
  border: 1px solid var(--border);
  background: rgba(15, 23, 42, 0.5);
  color: var(--gold);
}

.hero-title {
  font-size: 3rem;
  font-weight: 900;
  letter-spacing: -0.05em;
  margin-bottom: 2rem;
}

.hero-title .plain {
  background: linear-gradient(to bottom, #ffffff, var(--text-muted));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.hero-subtitle {
  font-size: 1.25rem;
  max-width: 42rem;
  margin: 0 auto 3rem;
  color: var(--text-secondary);
}

@media (min-width: 768px) {
  .hero-title { font-size: 4.5rem; }
}

/* === Tabs === */
.tab-bar {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 1.25rem;
}

.tab {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 1rem 2.5rem;
  border-radius: 1rem;
  border: 2px solid var(--gold);
  background: transparent;
  color: var(--gold);
  font-weight: 700;
  font-size: 1rem;
  cursor: pointer;
  opacity: 0.6;
  transition: all var(--transition-normal);
}

.tab:hover {
  opacity: 1;
}

.tab.active {
  background: var(--gold);
  color: var(--bg);
  opacity: 1;
  transform: scale(1.05);
  box-shadow: 0 0 30px var(--gold-glow);
}

/* === Main === */
.guide-main {
  max-width: 72rem;
  margin: 0 auto;
  padding: 5rem 1rem;
}

.section-block {
  animation: slide-in 700ms ease;
}

@keyframes slide-in {
  from { opacity: 0; transform: translateY(1.5rem); }
  to { opacity: 1; transform: translateY(0); }
}

.section-header {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  margin-bottom: 2rem;
  padding-bottom: 1rem;
  border-bottom: 1px solid var(--border);
}

.section-header-icon {
  padding: 0.5rem;
  border-radius: 0.5rem;
  background: var(--gold);
  color: #0f172a;
}

.section-header h2 {
  font-size: 1.5rem;
  font-weight: 700;
}

.icon { width: 1.5rem; height: 1.5rem; flex-shrink: 0; }
.icon-sm { width: 1rem; height: 1rem; flex-shrink: 0; }
.icon-lg { width: 2.5rem; height: 2.5rem; }
.icon-xl { width: 3rem; height: 3rem; }

/* === Step cards === */
.step-card {
  display: flex;
  flex-direction: column;
  gap: 2rem;
  padding: 1.5rem;
  margin-bottom: 2.5rem;
  border-radius: 1rem;
  border: 1px solid var(--border);
  background: var(--card);
  box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
  transition: border-color var(--transition-normal);
}

.step-card:hover {
  border-color: var(--border-hover);
}

@media (min-width: 768px) {
  .step-card { flex-direction: row; }
}

.step-body, .step-card .screenshot { flex: 1; }

.step-heading {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  margin-bottom: 1rem;
}

.step-number {
  width: 2rem;
  height: 2rem;
  border-radius: 9999px;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--gold);
  color: #0f172a;
  font-weight: 700;
}

.step-heading h3 {
  font-size: 1.25rem;
  font-weight: 700;
  color: var(--text-primary);
}

.step-items {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.step-items li {
  display: flex;
  align-items: flex-start;
  gap: 0.5rem;
  color: var(--text-secondary);
}

.step-items li .icon-sm {
  margin-top: 0.25rem;
  color: var(--gold);
}

/* === Screenshots === */
.screenshot {
  min-height: 200px;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 0.75rem;
  border: 1px solid var(--border);
  background: rgba(15, 23, 42, 0.5);
  overflow: hidden;
}

.screenshot img {
  max-width: 100%;
  display: block;
}

.screenshot-placeholder {
  text-align: center;
  padding: 1rem;
}

.screenshot-label {
  font-family: var(--font-mono);
  font-size: 10px;
  text-transform: uppercase;
  letter-spacing: 0.1em;
  margin-bottom: 0.5rem;
  color: var(--gold);
}

.screenshot-caption {
  font-size: 0.875rem;
  color: var(--text-muted);
}

/* === Notes === */
.notes {
  display: flex;
  flex-direction: column;
  gap: 4rem;
}

.notes-grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: 2.5rem;
}

@media (min-width: 768px) {
  .notes-grid { grid-template-columns: 1fr 1fr; }
  .payment-steps { grid-template-columns: repeat(3, 1fr); }
}

.notes-panel {
  position: relative;
  overflow: hidden;
  padding: 2.5rem;
  border-radius: 2.5rem;
  border: 1px solid var(--border);
  background: var(--card);
}

.notes-panel::before {
  content: "";
  position: absolute;
  top: 0;
  left: 0;
  width: 0.5rem;
  height: 100%;
  background: var(--gold);
}

.notes-panel h3 {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  margin-bottom: 1.5rem;
  font-size: 1.5rem;
  font-weight: 700;
  color: var(--text-primary);
}

.notes-panel h3 .icon { color: var(--gold); }

.key-points {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
}

.key-points li {
  display: flex;
  align-items: flex-start;
  gap: 0.75rem;
  font-size: 1.125rem;
  color: var(--text-secondary);
}

.key-point-dot {
  width: 0.5rem;
  height: 0.5rem;
  margin-top: 0.6rem;
  border-radius: 9999px;
  flex-shrink: 0;
  background: var(--gold);
  box-shadow: 0 0 10px rgba(212, 175, 55, 0.5);
}

.notes-panel.warning {
  border-color: var(--danger-border);
  background: rgba(69, 10, 10, 0.1);
}

.notes-panel.warning::before { background: #dc2626; }
.notes-panel.warning h3, .notes-panel.warning h3 .icon { color: var(--danger); }

.restrictions-lead {
  font-weight: 700;
  font-size: 1.125rem;
  color: var(--text-body);
  margin-bottom: 1.5rem;
}

.network-tags {
  display: flex;
  gap: 1.25rem;
  margin-bottom: 1.5rem;
}

.network-tag {
  padding: 0.75rem 1.5rem;
  border-radius: 1rem;
  border: 1px solid var(--danger-border);
  background: #0f172a;
  font-family: var(--font-mono);
  font-weight: 700;
  color: var(--danger);
}

.network-warning {
  font-weight: 500;
  color: var(--danger-soft);
}

.payment-panel {
  padding: 2.5rem;
  border-radius: 3rem;
  border: 1px solid var(--border);
  background: var(--card);
}

.payment-panel h3 {
  font-size: 1.875rem;
  font-weight: 700;
  text-align: center;
  margin-bottom: 4rem;
}

.payment-steps {
  display: grid;
  grid-template-columns: 1fr;
  gap: 3rem;
}

.payment-step {
  text-align: center;
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.payment-icon {
  width: 5rem;
  height: 5rem;
  margin: 0 auto;
  border-radius: 2rem;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--bg);
  border: 1px solid var(--gold);
  color: var(--gold);
  transition: transform var(--transition-normal);
}

.payment-step:hover .payment-icon { transform: scale(1.1); }

.payment-step h4 {
  font-size: 1.25rem;
  font-weight: 700;
  color: var(--text-primary);
}

.payment-step p.description {
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.payment-step .screenshot { min-height: 150px; }

/* === Footer === */
.guide-footer {
  padding: 4rem 1rem;
  border-top: 1px solid var(--border);
  background: var(--card);
}

.footer-inner {
  max-width: 72rem;
  margin: 0 auto;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: space-between;
  gap: 2.5rem;
}

@media (min-width: 768px) {
  .footer-inner { flex-direction: row; }
}

.footer-brand {
  display: flex;
  align-items: center;
  gap: 1rem;
}

.footer-mark {
  width: 3rem;
  height: 3rem;
  border-radius: 1rem;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--gold);
  color: #0f172a;
  font-weight: 900;
  font-size: 1.125rem;
}

.footer-name {
  display: block;
  font-weight: 700;
  font-size: 1.25rem;
  color: var(--text-primary);
}

.footer-tagline {
  font-size: 0.75rem;
  text-transform: uppercase;
  letter-spacing: 0.1em;
  color: var(--gold);
}

.footer-links {
  display: flex;
  gap: 2.5rem;
  font-size: 0.875rem;
  font-weight: 700;
}

.footer-links a {
  color: var(--text-secondary);
  text-decoration: none;
  transition: color var(--transition-fast);
}

.footer-links a:hover { color: var(--text-primary); }

.footer-copyright {
  font-family: var(--font-mono);
  font-size: 0.75rem;
  color: var(--text-secondary);
}
"#;
