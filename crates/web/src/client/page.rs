use super::escape;
use super::table::TableView;

/// The full workouts page with `table` already painted.
pub fn render_page(table: &TableView, notice: Option<&str>) -> String {
    let notice = notice
        .map(|text| format!(r#"<p class="notice">{}</p>"#, escape(text)))
        .unwrap_or_default();

    INDEX_HTML
        .replace("{{NOTICE}}", &notice)
        .replace("{{ROWS}}", &table.to_html())
}

pub fn render_not_found() -> String {
    NOT_FOUND_HTML.to_string()
}

const NOT_FOUND_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <title>Not Found</title>
</head>
<body>
  <h1>404 - Not Found</h1>
  <p><a href="/">Back to the workout log</a></p>
</body>
</html>
"#;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Workout Log</title>
  <style>
    body {
      font-family: "Trebuchet MS", sans-serif;
      margin: 32px;
      color: rgb(43, 42, 40);
    }

    form {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
      align-items: end;
      margin-bottom: 12px;
    }

    label {
      display: grid;
      gap: 4px;
      font-size: 0.9rem;
    }

    table {
      border-collapse: collapse;
      min-width: 640px;
    }

    th,
    td {
      border-bottom: 1px solid rgba(47, 72, 88, 0.15);
      padding: 6px 10px;
      text-align: left;
    }

    .error {
      color: rgb(198, 59, 43);
      min-height: 1.2em;
    }

    .notice {
      color: rgb(45, 122, 75);
    }
  </style>
</head>
<body>
  <h1>Workout Log</h1>
  {{NOTICE}}
  <form id="workoutForm">
    <label>Name <input type="text" id="name" maxlength="255" /></label>
    <label>Reps <input type="number" id="reps" /></label>
    <label>Weight <input type="number" id="weight" /></label>
    <label>Unit
      <select id="lbs">
        <option value="1">lbs</option>
        <option value="0">kgs</option>
      </select>
    </label>
    <label>Date <input type="date" id="date" /></label>
    <input type="submit" id="insertButton" value="Add" />
  </form>
  <p class="error" id="errMsg"></p>

  <table>
    <thead>
      <tr>
        <th>Name</th>
        <th>Reps</th>
        <th>Weight</th>
        <th>Unit</th>
        <th>Date</th>
        <th></th>
        <th></th>
      </tr>
    </thead>
    <tbody id="tableData">{{ROWS}}</tbody>
  </table>

  <script>
    const tableBody = document.getElementById('tableData');
    const errOut = document.getElementById('errMsg');

    const send = (method, url, payload, onSuccess, onFailure) => {
      const req = new XMLHttpRequest();
      req.open(method, url, true);
      req.setRequestHeader('Content-Type', 'application/json');
      req.addEventListener('load', () => {
        if (req.status >= 200 && req.status < 400) {
          onSuccess(req.responseText);
        } else {
          console.log('Error! ' + req.statusText);
          if (onFailure) {
            onFailure();
          }
        }
      });
      req.addEventListener('error', () => {
        console.log('Error! request failed');
        if (onFailure) {
          onFailure();
        }
      });
      req.send(payload === null ? null : JSON.stringify(payload));
    };

    const buildTable = () => {
      send('GET', '/rows', null, (html) => {
        tableBody.innerHTML = html;
      });
    };

    const appendRow = (id) => {
      send('GET', '/rows/' + id, null, (html) => {
        tableBody.insertAdjacentHTML('beforeend', html);
      });
    };

    document.getElementById('insertButton').addEventListener('click', (event) => {
      event.preventDefault();
      const payload = {};
      ['name', 'reps', 'weight', 'lbs', 'date'].forEach((field) => {
        payload[field] = document.getElementById(field).value;
      });
      send('POST', '/', payload, (text) => {
        const response = JSON.parse(text);
        if (response.errMsg) {
          errOut.textContent = response.errMsg;
          return;
        }
        errOut.textContent = '';
        JSON.parse(response.tableData).forEach((record) => appendRow(record.id));
      });
    });

    tableBody.addEventListener('click', (event) => {
      const button = event.target;
      const row = button.closest('tr');
      if (!row) {
        return;
      }

      if (button.classList.contains('edit')) {
        event.preventDefault();
        send('GET', '/rows/' + row.id + '/edit', null, (html) => {
          row.outerHTML = html;
        });
      } else if (button.classList.contains('save')) {
        event.preventDefault();
        if (row.dataset.state !== 'editing') {
          return;
        }
        const payload = { id: row.id };
        row.querySelectorAll('input[name], select[name]').forEach((input) => {
          payload[input.name] = input.value;
        });
        row.dataset.state = 'saving';
        send('POST', '/update', payload, buildTable, () => {
          row.dataset.state = 'editing';
        });
      } else if (button.classList.contains('delete')) {
        event.preventDefault();
        send('POST', '/del', { id: row.id }, () => {
          const current = document.getElementById(row.id);
          if (current) {
            tableBody.removeChild(current);
          }
        });
      }
    });
  </script>
</body>
</html>
"#;
