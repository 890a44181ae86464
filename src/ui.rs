pub fn render_index(label: &str) -> String {
    INDEX_HTML.replace("{{LABEL}}", &escape_html(label))
}

fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Habits</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(720px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 24px;
    }

    header {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-size: clamp(1.6rem, 4vw, 2.4rem);
      margin: 0;
      text-align: center;
      flex: 1;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 10px 16px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent-2);
      color: white;
    }

    button:disabled {
      opacity: 0.35;
      cursor: default;
    }

    .habit {
      display: flex;
      align-items: center;
      gap: 12px;
      background: white;
      border-radius: 18px;
      padding: 14px 18px;
      border-left: 6px solid var(--tint, var(--accent));
    }

    .habit .name {
      flex: 1;
    }

    .habit.done .name {
      text-decoration: line-through;
      color: #8b857d;
    }

    .streak {
      font-size: 0.85rem;
      color: #8b857d;
    }

    form {
      display: flex;
      gap: 10px;
    }

    input[type="text"] {
      flex: 1;
      border-radius: 999px;
      border: 1px solid rgba(47, 72, 88, 0.2);
      padding: 10px 16px;
      font: inherit;
    }

    .grid {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 6px;
      text-align: center;
      font-size: 0.8rem;
    }

    .cell {
      border-radius: 10px;
      padding: 8px 0;
      background: rgba(255, 107, 74, calc(0.1 + var(--ratio, 0) * 0.8));
    }

    .cell.future {
      background: rgba(47, 72, 88, 0.06);
      color: #b8b2aa;
    }

    .status {
      min-height: 1.2em;
      font-size: 0.9rem;
      color: #8b857d;
    }

    .status.error {
      color: #c0392b;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <button id="prev-day" aria-label="Previous day">&larr;</button>
      <h1 id="date-text">{{LABEL}}</h1>
      <button id="next-day" aria-label="Next day">&rarr;</button>
    </header>

    <section id="habit-list"></section>

    <form id="add-form">
      <input id="new-habit-input" type="text" placeholder="New habit" autocomplete="off" />
      <input id="new-habit-color" type="color" value="#ff6b4a" />
      <button type="submit" id="confirm-add" disabled>Add</button>
    </form>

    <section>
      <div class="grid" id="week-grid"></div>
    </section>

    <section>
      <h2 id="month-label"></h2>
      <div class="grid" id="month-grid"></div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const statusEl = document.getElementById('status');
    const input = document.getElementById('new-habit-input');
    const colorInput = document.getElementById('new-habit-color');
    const confirmAdd = document.getElementById('confirm-add');

    const setStatus = (message, tone) => {
      statusEl.textContent = message;
      statusEl.className = tone ? `status ${tone}` : 'status';
    };

    const request = async (url, options) => {
      const res = await fetch(url, options);
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.status === 204 ? null : res.json();
    };

    const renderDay = (day) => {
      document.getElementById('date-text').textContent = day.label;
      document.getElementById('next-day').disabled = !day.canGoForward;

      const list = document.getElementById('habit-list');
      list.innerHTML = '';
      day.habits.forEach((habit) => {
        const row = document.createElement('div');
        row.className = habit.done ? 'habit done' : 'habit';
        if (habit.color) {
          row.style.setProperty('--tint', habit.color);
        }

        const check = document.createElement('input');
        check.type = 'checkbox';
        check.checked = habit.done;
        check.addEventListener('change', () => {
          request(`/api/habits/${habit.id}/toggle?date=${day.date}`, { method: 'POST' })
            .then(refresh)
            .catch((err) => setStatus(err.message, 'error'));
        });

        const name = document.createElement('span');
        name.className = 'name';
        name.textContent = habit.name;

        const streak = document.createElement('span');
        streak.className = 'streak';
        streak.textContent = habit.streak > 0 ? `${habit.streak} day streak` : '';

        const remove = document.createElement('button');
        remove.textContent = 'X';
        remove.addEventListener('click', () => {
          request(`/api/habits/${habit.id}`, { method: 'DELETE' })
            .then(refresh)
            .catch((err) => setStatus(err.message, 'error'));
        });

        row.append(check, name, streak, remove);
        list.appendChild(row);
      });
    };

    const renderCells = (el, cells) => {
      el.innerHTML = '';
      cells.forEach((cell) => {
        const div = document.createElement('div');
        if (cell) {
          div.className = cell.state === 'future' ? 'cell future' : 'cell';
          div.style.setProperty('--ratio', cell.ratio);
          div.textContent = cell.text;
        }
        el.appendChild(div);
      });
    };

    const renderWeek = (week) => {
      renderCells(
        document.getElementById('week-grid'),
        week.days.map((d) => ({ ...d, text: d.weekday }))
      );
    };

    const renderMonth = (month) => {
      document.getElementById('month-label').textContent = month.label;
      const blanks = Array.from({ length: month.leadingBlanks }, () => null);
      renderCells(
        document.getElementById('month-grid'),
        blanks.concat(month.days.map((d) => ({ ...d, text: d.day })))
      );
    };

    const draw = async (day) => {
      renderDay(day);
      const [week, month] = await Promise.all([
        request(`/api/week?date=${day.date}`),
        request(`/api/month?date=${day.date}`)
      ]);
      renderWeek(week);
      renderMonth(month);
    };

    const refresh = async () => draw(await request('/api/day'));

    const navigate = (direction) => {
      request(`/api/day/${direction}`, { method: 'POST' })
        .then(draw)
        .catch((err) => setStatus(err.message, 'error'));
    };

    document.getElementById('prev-day').addEventListener('click', () => navigate('prev'));
    document.getElementById('next-day').addEventListener('click', () => navigate('next'));

    input.addEventListener('input', () => {
      confirmAdd.disabled = input.value.trim().length === 0;
    });

    document.getElementById('add-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const name = input.value.trim();
      if (name.length === 0) {
        return;
      }
      request('/api/habits', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ name, color: colorInput.value })
      })
        .then(() => {
          input.value = '';
          confirmAdd.disabled = true;
          return refresh();
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"##;
