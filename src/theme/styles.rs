//! Global CSS for the foundation site.
//!
//! Warm orange for calls to action, green for growth and success, white
//! cards on a light background.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --primary: #ff7e00;
  --primary-dark: #e06f00;
  --secondary: #008000;
  --secondary-dark: #006400;
  --text: #333333;
  --text-light: #666666;
  --background: #f8f9fa;
  --white: #ffffff;
  --danger: #dc3545;
  --info: #17a2b8;
  --shadow: 0 10px 30px rgba(0, 0, 0, 0.1);
  --radius: 12px;
  --header-height: 80px;
  --transition: 300ms ease;
  --font: 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html { scroll-behavior: smooth; }

body {
  font-family: var(--font);
  color: var(--text);
  background: var(--background);
  line-height: 1.6;
}

.page:focus { outline: none; }

.skip-link { position: absolute; top: -40px; left: 0; padding: 0.5rem 1rem; background: var(--primary); color: var(--white); z-index: 1000; }
.skip-link:focus { top: 0; }

.container {
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 1.5rem;
}

/* === Header === */
.header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  height: var(--header-height);
  z-index: 100;
  transition: background var(--transition), box-shadow var(--transition);
}

.header .container {
  display: flex;
  align-items: center;
  justify-content: space-between;
  height: 100%;
}

.logo {
  font-weight: 700;
  font-size: 1.25rem;
  color: var(--primary);
}

.nav { display: flex; gap: 1.5rem; list-style: none; }
.nav-actions { display: flex; gap: 0.75rem; }
.menu-toggle { display: none; background: none; border: none; font-size: 1.4rem; cursor: pointer; }

@media (max-width: 900px) {
  .menu-toggle { display: block; }
  .nav {
    display: none;
    position: absolute;
    top: var(--header-height);
    left: 0;
    right: 0;
    flex-direction: column;
    padding: 1rem 1.5rem;
    background: var(--white);
    box-shadow: var(--shadow);
  }
  .nav.open { display: flex; }
  .nav-actions { display: none; }
  .stats { grid-template-columns: repeat(2, 1fr); }
}

.nav-link {
  color: var(--text);
  text-decoration: none;
  font-weight: 500;
  transition: color var(--transition);
}

.nav-link:hover, .nav-link.active { color: var(--primary); }

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.75rem 1.5rem;
  border-radius: 50px;
  border: 2px solid transparent;
  font-weight: 600;
  cursor: pointer;
  transition: all var(--transition);
}

.btn:disabled { opacity: 0.6; cursor: not-allowed; }
.btn-primary { background: var(--primary); color: var(--white); }
.btn-primary:hover { background: var(--primary-dark); transform: translateY(-2px); }
.btn-secondary { background: var(--secondary); color: var(--white); }
.btn-secondary:hover { background: var(--secondary-dark); }
.btn-outline { background: transparent; border-color: var(--primary); color: var(--primary); }

/* === Sections === */
section { padding: 5rem 0; }
.section-title { text-align: center; font-size: 2.25rem; margin-bottom: 1rem; }
.section-subtitle { text-align: center; color: var(--text-light); margin-bottom: 3rem; }

.hero {
  min-height: 90vh;
  display: flex;
  align-items: center;
  padding-top: calc(var(--header-height) + 2rem);
  background: linear-gradient(135deg, rgba(255, 126, 0, 0.12), rgba(0, 128, 0, 0.12));
}

.hero h1 { font-size: 3rem; line-height: 1.2; margin-bottom: 1rem; }
.hero-actions { display: flex; gap: 1rem; margin-top: 2rem; }

.card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
  gap: 2rem;
}

.card {
  background: var(--white);
  border-radius: var(--radius);
  box-shadow: var(--shadow);
  padding: 2rem;
}

img.lazy { opacity: 0; transition: opacity 500ms ease; }
img.lazy.loaded { opacity: 1; }

/* === Impact counters === */
.stats { display: grid; grid-template-columns: repeat(4, 1fr); gap: 2rem; text-align: center; }
.stat-number { display: block; font-size: 2.75rem; font-weight: 700; color: var(--primary); }
.stat-item { display: flex; flex-direction: column; gap: 0.25rem; }
.stat-label { color: var(--text-light); }
.impact { background: var(--white); }

.card img { width: 100%; height: 200px; object-fit: cover; border-radius: var(--radius); margin-bottom: 1rem; }
.card i.card-icon { font-size: 2rem; color: var(--primary); margin-bottom: 1rem; }
.about-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; align-items: center; }
.about-grid img { width: 100%; border-radius: var(--radius); }
.testimonial blockquote { font-style: italic; margin-bottom: 1rem; }
.testimonial cite { font-weight: 600; color: var(--secondary); }
.contact-list { list-style: none; display: grid; gap: 1rem; }
.contact-list i { color: var(--primary); width: 1.5rem; }
.footer-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 2rem; }
.footer-bottom { text-align: center; margin-top: 2rem; font-size: 0.9rem; opacity: 0.7; }

/* === Gallery === */
.media-gallery {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(250px, 1fr));
  gap: 1.5rem;
}

.media-item {
  position: relative;
  border-radius: var(--radius);
  overflow: hidden;
  cursor: pointer;
  box-shadow: var(--shadow);
}

.media-item img { width: 100%; height: 200px; object-fit: cover; display: block; }

.media-overlay {
  position: absolute;
  inset: 0 0 auto 0;
  height: 200px;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.3);
}

.play-button {
  width: 60px;
  height: 60px;
  border-radius: 50%;
  background: rgba(255, 255, 255, 0.9);
  color: var(--primary);
  display: flex;
  align-items: center;
  justify-content: center;
}

.media-title { padding: 0.75rem 1rem; background: var(--white); font-weight: 600; }

/* === Modals === */
.modal {
  position: fixed;
  inset: 0;
  z-index: 1000;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.6);
}

.modal-content {
  position: relative;
  background: var(--white);
  border-radius: var(--radius);
  padding: 2.5rem;
  width: min(560px, 92vw);
  max-height: 90vh;
  overflow-y: auto;
}

.close-modal, .lightbox-close {
  position: absolute;
  top: 1rem;
  right: 1rem;
  border: none;
  background: none;
  font-size: 2rem;
  cursor: pointer;
  color: var(--text-light);
}

.lightbox-content { background: #000; color: var(--white); width: min(960px, 95vw); padding: 0; }
.lightbox-content .lightbox-close { color: var(--white); z-index: 2; }
.lightbox-media img, .lightbox-media video { width: 100%; max-height: 70vh; object-fit: contain; display: block; }
.lightbox-info { padding: 1rem 1.5rem; }
.lightbox-nav {
  position: absolute;
  top: 45%;
  border: none;
  background: rgba(255, 255, 255, 0.2);
  color: var(--white);
  font-size: 1.5rem;
  width: 48px;
  height: 48px;
  border-radius: 50%;
  cursor: pointer;
}
.lightbox-nav.prev { left: 1rem; }
.lightbox-nav.next { right: 1rem; }

.step-indicator { display: flex; gap: 0.5rem; margin-bottom: 1.5rem; }
.step-indicator span { flex: 1; height: 4px; border-radius: 2px; background: #e0e0e0; }
.step-indicator span.done { background: var(--primary); }

.amount-options { display: grid; grid-template-columns: repeat(3, 1fr); gap: 0.75rem; margin-bottom: 1rem; }
.amount-btn {
  padding: 0.75rem;
  border: 2px solid #e0e0e0;
  border-radius: 8px;
  background: var(--white);
  font-weight: 600;
  cursor: pointer;
}
.amount-btn.selected { border-color: var(--primary); background: rgba(255, 126, 0, 0.1); color: var(--primary); }

.payment-methods { display: flex; flex-direction: column; gap: 0.75rem; margin-bottom: 1.5rem; }
.payment-method {
  display: flex;
  align-items: center;
  gap: 1rem;
  padding: 1rem;
  border: 2px solid #e0e0e0;
  border-radius: 8px;
  cursor: pointer;
}
.payment-method.selected { border-color: var(--primary); }
.payment-info { display: flex; align-items: center; gap: 1rem; }
.payment-info i { font-size: 1.5rem; }

.donation-summary { background: var(--background); border-radius: 8px; padding: 0.75rem 1rem; margin-bottom: 1.25rem; font-weight: 600; }
.modal-actions { display: flex; justify-content: space-between; gap: 1rem; margin-top: 1.5rem; }

.bank-details { display: flex; flex-direction: column; gap: 0.75rem; }
.bank-row { display: flex; justify-content: space-between; align-items: center; gap: 1rem; }
.bank-label { color: var(--text-light); flex: 1; }
.copy-btn { border: none; background: none; color: var(--primary); cursor: pointer; }

/* === Forms === */
.form-group { margin-bottom: 1.25rem; display: flex; flex-direction: column; gap: 0.4rem; }
.form-group label { font-weight: 600; }
.form-group .required { color: var(--danger); }
.form-group input, .form-group textarea, .form-group select {
  padding: 0.75rem 1rem;
  border: 2px solid #e0e0e0;
  border-radius: 8px;
  font: inherit;
}
.form-group input:focus, .form-group textarea:focus, .form-group select:focus {
  outline: none;
  border-color: var(--primary);
}

/* === Messages === */
.message {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 0.9rem 1rem;
  border-radius: 8px;
  margin-bottom: 1.25rem;
  animation: slideIn 300ms ease;
}
.message.success { background: #d4edda; color: #155724; }
.message.error { background: #f8d7da; color: #721c24; }
.message.info { background: #d1ecf1; color: #0c5460; }

@keyframes slideIn {
  from { opacity: 0; transform: translateY(-10px); }
  to { opacity: 1; transform: translateY(0); }
}

/* === Toasts === */
.toast-stack { position: fixed; top: 100px; right: 20px; z-index: 2000; display: flex; flex-direction: column; gap: 0.75rem; }
.toast {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 1rem 1.25rem;
  border-radius: 8px;
  color: var(--white);
  box-shadow: var(--shadow);
  transform: translateX(120%);
  transition: transform 300ms ease;
}
.toast.show { transform: translateX(0); }
.toast-success { background: var(--secondary); }
.toast-error { background: var(--danger); }

/* === Scroll to top === */
.scroll-to-top {
  position: fixed;
  bottom: 2rem;
  right: 2rem;
  width: 48px;
  height: 48px;
  border-radius: 50%;
  border: none;
  background: var(--primary);
  color: var(--white);
  cursor: pointer;
  opacity: 0;
  visibility: hidden;
  transition: all var(--transition);
}
.scroll-to-top.visible { opacity: 1; visibility: visible; }

/* === Footer === */
.footer { background: #222; color: #ddd; padding: 3rem 0; }
.footer a { color: #ddd; }
"#;
