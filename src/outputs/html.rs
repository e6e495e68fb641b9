//! The page itself: one self-contained HTML document with inline styles.
//!
//! Every value that came from the feed or the clock passes through
//! `html_escape` before it lands in markup or an attribute.

use crate::models::BuildResult;
use crate::outputs::assets::MEME_ASSET;
use html_escape::encode_safe;
use std::fmt::Write;

const SOURCE_URL: &str = "https://github.com/karmolty/daily-mews";

const STYLE: &str = r#"
    :root {
      --bg: #fff7ff;
      --ink: #140014;
      --hot: #ff00cc;
      --cool: #00d5ff;
      --paper: #ffffff;
      --border: #140014;
    }

    body {
      margin: 0;
      color: var(--ink);
      background: var(--bg);
      font-family: "Comic Sans MS", "Comic Sans", "Trebuchet MS", system-ui, sans-serif;
    }

    .topbar {
      background: linear-gradient(90deg, var(--hot), var(--cool));
      border-bottom: 4px dashed var(--border);
      padding: 10px 14px;
      text-align: center;
      font-weight: 800;
      letter-spacing: 1px;
      text-shadow: 1px 1px 0 #fff;
    }

    .wrap { max-width: 980px; margin: 0 auto; padding: 16px; }

    .masthead {
      background: var(--paper);
      border: 4px double var(--border);
      padding: 14px;
      box-shadow: 6px 6px 0 rgba(0,0,0,.25);
    }

    .brand {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
      flex-wrap: wrap;
    }

    h1 {
      margin: 0;
      font-size: clamp(2.2rem, 4vw, 3.2rem);
      color: var(--hot);
      text-shadow: 2px 2px 0 #000;
    }

    .date {
      font-family: "Courier New", Courier, monospace;
      background: #f5fffd;
      border: 2px solid var(--border);
      padding: 6px 10px;
    }

    .marquee {
      margin-top: 10px;
      border: 3px ridge var(--border);
      background: #fff;
      padding: 6px 10px;
      overflow: hidden;
      white-space: nowrap;
      font-weight: 700;
    }

    .marquee span {
      display: inline-block;
      padding-left: 100%;
      animation: scroll 18s linear infinite;
    }

    @keyframes scroll {
      0% { transform: translateX(0); }
      100% { transform: translateX(-100%); }
    }

    .grid {
      margin-top: 16px;
      display: grid;
      grid-template-columns: 1.4fr 1fr;
      gap: 16px;
      align-items: start;
    }

    @media (max-width: 820px) {
      .grid { grid-template-columns: 1fr; }
    }

    .panel {
      background: var(--paper);
      border: 4px solid var(--border);
      box-shadow: 6px 6px 0 rgba(0,0,0,.25);
    }

    .panel .hd {
      padding: 10px 12px;
      background: #fff0fb;
      border-bottom: 3px dashed var(--border);
      font-weight: 900;
    }

    .panel .bd { padding: 12px; }

    .meme {
      width: 100%;
      height: auto;
      border: 3px ridge var(--border);
      background: #fff;
    }

    .tiny { font-size: 0.95rem; opacity: 0.9; }

    .story h3 { margin: 0 0 6px 0; }
    .story p { margin: 0 0 12px 0; }

    footer {
      margin: 18px 0 30px;
      text-align: center;
      font-family: "Courier New", Courier, monospace;
      font-size: 0.95rem;
    }

    a { color: #0000ee; }
    a:visited { color: #551a8b; }
"#;

/// What the page needs beyond the snapshot itself.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    /// Human-readable timestamp for the masthead, e.g. `Monday, January 1, 2024 • 6:00 AM PST`.
    pub date_pretty: &'a str,
    /// Year printed in the footer.
    pub year: i32,
}

fn render_stories(result: &BuildResult) -> String {
    let mut out = String::new();
    for story in &result.headlines {
        write!(
            out,
            r#"
      <article class="story">
        <h3>📰 {}</h3>
        <p>{}</p>
      </article>"#,
            encode_safe(&story.headline),
            encode_safe(&story.body),
        )
        .unwrap();
    }
    out
}

/// Render the full `index.html` document.
pub fn render_page(result: &BuildResult, ctx: PageContext<'_>) -> String {
    let stories = render_stories(result);
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>The Daily Mews</title>
  <meta name="description" content="A very serious news site for very serious cats." />
  <style>{style}</style>
</head>
<body>
  <div class="topbar">WELCOME TO THE DAILY MEWS • YOUR #1 SOURCE FOR CAT FACTS, FEELINGS, &amp; FIBS (SATIRE)</div>

  <div class="wrap">
    <div class="masthead">
      <div class="brand">
        <h1>The Daily Mews</h1>
        <div class="date">{date}</div>
      </div>
      <div class="marquee"><span>BREAKING: Experts confirm your cat was right all along • UPDATE: the bowl is 0.7% empty • DEVELOPING: box acquisition at an all-time high •</span></div>
    </div>

    <div class="grid">
      <section class="panel">
        <div class="hd">🐾 Today’s Featured Cat Meme</div>
        <div class="bd">
          <img class="meme" src="{asset}" alt="Daily cat meme" />
          <p class="tiny">
            Source: <a href="{permalink}" target="_blank" rel="noreferrer">r/Catmemes</a> “{title}”
          </p>
        </div>
      </section>

      <aside class="panel">
        <div class="hd">🧶 Headlines</div>
        <div class="bd">
          {stories}
        </div>
      </aside>
    </div>

    <footer>
      © {year} The Daily Mews • Best viewed on a beige CRT •
      <a href="{source}" target="_blank" rel="noreferrer">source</a>
    </footer>
  </div>
</body>
</html>
"#,
        style = STYLE,
        date = encode_safe(ctx.date_pretty),
        asset = MEME_ASSET,
        permalink = encode_safe(&result.meme.permalink),
        title = encode_safe(&result.meme.title),
        stories = stories,
        year = ctx.year,
        source = SOURCE_URL,
    )
}
