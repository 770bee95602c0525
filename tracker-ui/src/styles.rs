//! CSS for the tracker page.
//!
//! Shared by the browser build and the static renderer. Animations are pure
//! CSS: panels fade up on mount and out upward on reset, cards stagger
//! through `animation-delay`, and the progress bar grows from zero to
//! `--progress`.

/// Complete stylesheet for the tracker page - soft violet/indigo theme.
pub const TRACKER_CSS: &str = r#"
:root {
    --violet-600: #7c3aed;
    --indigo-50: #eef2ff;
    --indigo-100: #e0e7ff;
    --indigo-500: #6366f1;
    --indigo-600: #4f46e5;
    --indigo-700: #4338ca;
    --indigo-900: #312e81;
    --emerald-50: #ecfdf5;
    --emerald-100: #d1fae5;
    --emerald-500: #10b981;
    --emerald-800: #065f46;
    --red-50: #fef2f2;
    --red-100: #fee2e2;
    --red-500: #ef4444;
    --red-800: #991b1b;
    --radius-lg: 24px;
    --radius-md: 16px;
    --font-sans: system-ui, -apple-system, 'Segoe UI', sans-serif;
}

*, *::before, *::after {
    box-sizing: border-box;
}

body {
    margin: 0;
    font-family: var(--font-sans);
    color: var(--indigo-900);
}

.tracker {
    position: relative;
    min-height: 100vh;
    padding: 16px;
    overflow: hidden;
    background: linear-gradient(135deg, #f5f3ff, var(--indigo-50), #eff6ff);
}

.backdrop {
    position: absolute;
    inset: 0;
    pointer-events: none;
    overflow: hidden;
}

.blob {
    position: absolute;
    border-radius: 50%;
    filter: blur(64px);
    opacity: 0.2;
    mix-blend-mode: multiply;
    animation: blob 7s infinite;
}

.blob-violet { top: 40px; left: 40px; width: 256px; height: 256px; background: #d8b4fe; }
.blob-amber { top: 0; right: 40px; width: 288px; height: 288px; background: #fde047; animation-delay: 2s; }
.blob-pink { bottom: -32px; left: 80px; width: 288px; height: 288px; background: #f9a8d4; animation-delay: 4s; }

@keyframes blob {
    0%, 100% { transform: translate(0, 0) scale(1); }
    33% { transform: translate(30px, -50px) scale(1.1); }
    66% { transform: translate(-20px, 20px) scale(0.9); }
}

.tracker-column {
    position: relative;
    max-width: 28rem;
    margin: 0 auto;
}

.tracker-header {
    text-align: center;
    margin: 40px 0 32px;
}

.tracker-header h1 {
    margin: 0 0 12px;
    font-size: 2.25rem;
    background: linear-gradient(90deg, var(--violet-600), var(--indigo-600));
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.tracker-header p {
    margin: 0;
    font-size: 1.125rem;
    color: var(--indigo-700);
}

.panel {
    background: rgba(255, 255, 255, 0.8);
    backdrop-filter: blur(16px);
    border: 1px solid var(--indigo-50);
    border-radius: var(--radius-lg);
    box-shadow: 0 25px 50px -12px rgba(49, 46, 129, 0.25);
    padding: 32px;
    margin-bottom: 32px;
}

.fade-in-up {
    animation: fade-in-up 0.3s ease-out both;
}

@keyframes fade-in-up {
    from { opacity: 0; transform: translateY(10px); }
    to { opacity: 1; transform: translateY(0); }
}

.fade-out-up {
    animation: fade-out-up 0.3s ease-in both;
    pointer-events: none;
}

@keyframes fade-out-up {
    from { opacity: 1; transform: translateY(0); }
    to { opacity: 0; transform: translateY(-10px); }
}

/* Form */

.field { margin-bottom: 24px; }

.field label {
    display: block;
    margin: 0 0 8px 4px;
    font-size: 0.875rem;
    font-weight: 500;
    color: var(--indigo-700);
}

.input-wrap { position: relative; }

.input-wrap input {
    width: 100%;
    padding: 16px 20px;
    font-size: 1.125rem;
    border: 2px solid var(--indigo-100);
    border-radius: var(--radius-md);
    outline: none;
    transition: border-color 0.2s, box-shadow 0.2s;
}

.input-wrap input:focus {
    border-color: var(--indigo-500);
    box-shadow: 0 0 0 3px var(--indigo-100);
}

.input-adornment {
    position: absolute;
    inset: 0 12px 0 auto;
    display: flex;
    align-items: center;
    color: #818cf8;
    pointer-events: none;
}

.field-hint {
    margin: 8px 0 0 4px;
    font-size: 0.75rem;
    color: var(--indigo-500);
}

.submit-btn {
    width: 100%;
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 8px;
    padding: 16px 24px;
    font-size: 1.125rem;
    font-weight: 600;
    border: none;
    border-radius: var(--radius-md);
    color: #fff;
    background: linear-gradient(90deg, var(--violet-600), var(--indigo-600));
    cursor: pointer;
    transition: filter 0.2s;
}

.submit-btn:hover:not(:disabled) { filter: brightness(0.92); }

.submit-btn-idle {
    background: #d1d5db;
    color: #6b7280;
    cursor: not-allowed;
}

.icon-spin { animation: spin 1s linear infinite; }

@keyframes spin {
    to { transform: rotate(360deg); }
}

/* Results */

.results-head {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 24px;
}

.results-head h2 { margin: 0; font-size: 1.5rem; }

.reset-btn {
    display: flex;
    align-items: center;
    gap: 4px;
    border: none;
    background: none;
    font-size: 0.875rem;
    font-weight: 500;
    color: var(--indigo-600);
    cursor: pointer;
}

.reset-btn:hover { color: #3730a3; }

.progress { margin-bottom: 32px; }

.progress-head {
    display: flex;
    justify-content: space-between;
    margin-bottom: 8px;
    font-size: 0.875rem;
}

.progress-label { font-weight: 500; color: var(--indigo-700); }
.progress-value { font-weight: 700; }

.progress-track {
    height: 12px;
    border-radius: 999px;
    background: var(--indigo-100);
    overflow: hidden;
}

.progress-fill {
    height: 100%;
    width: var(--progress);
    background: linear-gradient(90deg, #8b5cf6, var(--indigo-500));
    animation: progress-grow 0.8s ease-out;
}

@keyframes progress-grow {
    from { width: 0; }
}

.milestone-list {
    display: flex;
    flex-direction: column;
    gap: 16px;
}

.milestone-card {
    border-radius: var(--radius-md);
    overflow: hidden;
    box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
    animation-duration: 0.5s;
}

.milestone-completed { background: linear-gradient(90deg, var(--emerald-50), #f0fdfa); }
.milestone-pending { background: linear-gradient(90deg, var(--red-50), #fff7ed); }

.milestone-body {
    display: flex;
    align-items: center;
    padding: 16px;
}

.milestone-glyph {
    position: relative;
    width: 56px;
    height: 56px;
    margin-right: 16px;
    display: flex;
    align-items: center;
    justify-content: center;
}

.glyph-halo {
    position: absolute;
    inset: 0;
    border-radius: 50%;
    opacity: 0.1;
}

.milestone-completed .glyph-halo { background: var(--emerald-500); animation: pulse 2s infinite; }
.milestone-pending .glyph-halo { background: var(--red-500); }

@keyframes pulse {
    50% { opacity: 0.25; }
}

.glyph-badge {
    position: relative;
    display: flex;
    padding: 8px;
    border-radius: 50%;
    background: #fff;
    box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
}

.milestone-completed .glyph-badge { color: var(--emerald-500); }
.milestone-pending .glyph-badge { color: var(--red-500); }

.milestone-text { flex: 1; }
.milestone-text h3 { margin: 0; font-size: 1.125rem; color: #111827; }
.milestone-text p { margin: 0; font-size: 0.875rem; color: #374151; }

.milestone-status {
    margin-left: 8px;
    padding: 4px 12px;
    border-radius: 999px;
    font-size: 0.875rem;
    font-weight: 500;
}

.milestone-completed .milestone-status { color: #059669; background: var(--emerald-100); }
.milestone-pending .milestone-status { color: #dc2626; background: var(--red-100); }

.milestone-footer {
    display: flex;
    align-items: center;
    gap: 4px;
    padding: 8px 16px;
    font-size: 0.75rem;
}

.milestone-completed .milestone-footer { color: var(--emerald-800); background: var(--emerald-100); }
.milestone-pending .milestone-footer { color: var(--red-800); background: var(--red-100); }

.checked-for {
    margin-top: 24px;
    padding-top: 24px;
    border-top: 1px solid var(--indigo-100);
    text-align: center;
}

.checked-for p { margin: 0 0 8px; color: var(--indigo-700); }

.checked-id {
    display: inline-block;
    padding: 8px 16px;
    border-radius: 8px;
    font-size: 1.125rem;
    font-weight: 500;
    color: var(--indigo-900) !important;
    background: var(--indigo-50);
}

/* Tips */

.tips-panel { padding: 24px; }

.tips-title {
    display: flex;
    align-items: center;
    gap: 8px;
    margin: 0 0 12px;
}

.tips-list {
    list-style: none;
    margin: 0;
    padding: 0;
    font-size: 0.875rem;
    color: #3730a3;
}

.tips-list li {
    display: flex;
    align-items: flex-start;
    gap: 8px;
    margin-bottom: 8px;
}

.icon-accent { color: var(--indigo-500); flex-shrink: 0; }
.icon-sm { flex-shrink: 0; }
"#;
