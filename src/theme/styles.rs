//! Global CSS styles for linkpage.
//!
//! A single centered column: header, social icons, bio, link cards, footer,
//! plus the floating share trigger and its modal.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --bg: #101418;
  --card-bg: #1a2027;
  --card-border: #2a323c;
  --card-hover: #222a33;
  --accent: #4fb3ff;
  --text-primary: #f2f4f7;
  --text-secondary: rgba(242, 244, 247, 0.7);
  --radius: 14px;
  --font-sans: 'Inter', -apple-system, 'Segoe UI', Roboto, sans-serif;
}

/* === Base === */
* { box-sizing: border-box; }

body {
  margin: 0;
  background: var(--bg);
  color: var(--text-primary);
  font-family: var(--font-sans);
}

.page {
  max-width: 640px;
  margin: 0 auto;
  padding: 3rem 1.25rem 2rem;
  display: flex;
  flex-direction: column;
  align-items: center;
}

/* === Header === */
#header {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
}

.account-icon {
  width: 96px;
  height: 96px;
  border-radius: 50%;
  object-fit: cover;
  border: 2px solid var(--card-border);
}

#pageTitle {
  margin: 0;
  font-size: 1.6rem;
  font-weight: 700;
  text-align: center;
}

.bio {
  margin: 1rem 0 0;
  max-width: 32rem;
  text-align: center;
  color: var(--text-secondary);
  line-height: 1.5;
  white-space: pre-line;
}

/* === Social Links === */
.social-links {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 0.75rem;
  margin-top: 1.25rem;
}

.social-link {
  color: var(--text-primary);
  opacity: 0.85;
  transition: opacity 0.15s ease, transform 0.15s ease;
}

.social-link:hover {
  opacity: 1;
  transform: translateY(-2px);
}

.social-icon {
  width: 24px;
  height: 24px;
  fill: currentColor;
}

/* === Link Cards === */
.link-container {
  width: 100%;
  display: flex;
  flex-direction: column;
  gap: 0.85rem;
  margin-top: 2rem;
}

.link-card {
  display: flex;
  align-items: center;
  gap: 1rem;
  padding: 1rem 1.25rem;
  background: var(--card-bg);
  border: 1px solid var(--card-border);
  border-radius: var(--radius);
  color: inherit;
  text-decoration: none;
  transition: background 0.15s ease, border-color 0.15s ease;
}

.link-card:hover {
  background: var(--card-hover);
  border-color: var(--accent);
}

.link-icon {
  flex: none;
  width: 28px;
  height: 28px;
  fill: var(--accent);
}

.link-content h2 {
  margin: 0;
  font-size: 1rem;
  font-weight: 600;
}

.link-content p {
  margin: 0.25rem 0 0;
  font-size: 0.875rem;
  color: var(--text-secondary);
}

/* === Footer === */
.page-footer {
  margin-top: 3rem;
  font-size: 0.8rem;
  color: var(--text-secondary);
}

/* === Share === */
.share-button {
  position: fixed;
  top: 1rem;
  right: 1rem;
  width: 40px;
  height: 40px;
  border-radius: 50%;
  border: 1px solid var(--card-border);
  background: var(--card-bg);
  color: var(--text-primary);
  cursor: pointer;
  display: flex;
  align-items: center;
  justify-content: center;
}

.share-modal {
  position: fixed;
  inset: 0;
  background: rgba(0, 0, 0, 0.65);
  display: none;
  align-items: center;
  justify-content: center;
  z-index: 100;
}

.share-modal.active {
  display: flex;
}

.share-content {
  position: relative;
  width: min(90vw, 360px);
  padding: 2rem 1.5rem 1.5rem;
  background: var(--card-bg);
  border: 1px solid var(--card-border);
  border-radius: var(--radius);
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
}

.share-content h2 {
  margin: 0;
  font-size: 1.1rem;
}

.qr-code {
  width: 200px;
  height: 200px;
  background: #ffffff;
  border-radius: 8px;
}

.qr-code svg {
  width: 100%;
  height: 100%;
}

.qr-error {
  color: var(--text-secondary);
  font-size: 0.85rem;
}

.url-container {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  max-width: 100%;
}

.url-text {
  overflow: hidden;
  text-overflow: ellipsis;
  white-space: nowrap;
  font-size: 0.85rem;
  color: var(--text-secondary);
}

.copied-feedback {
  font-size: 0.75rem;
  color: var(--accent);
}

.copy-button,
.close-modal,
.share-native-button {
  background: transparent;
  border: none;
  color: var(--text-primary);
  cursor: pointer;
}

.share-native-button {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.6rem 1.2rem;
  border: 1px solid var(--card-border);
  border-radius: 999px;
}

.close-modal {
  position: absolute;
  top: 0.5rem;
  right: 0.5rem;
}
"#;
