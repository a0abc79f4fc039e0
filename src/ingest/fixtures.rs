/// Test fixtures: representative JSON payloads from the IMGW public data API.
///
/// Trimmed to a handful of stations but otherwise shaped like the real
/// responses from:
///   https://danepubliczne.imgw.pl/api/data/synop/
///   https://danepubliczne.imgw.pl/api/data/hydro/
///
/// IMGW response shape:
///   [ { "<polish_field>": "<value as STRING>" | null, ... }, ... ]
///
/// Note: readings are JSON strings, not numbers, and missing readings come
/// back as `null`. Zero readings come back as `"0"`.

/// Three synop stations. Białystok reports no rainfall (`"0"`), Hel has no
/// pressure reading (`null`).
#[cfg(test)]
pub(crate) fn synop_json() -> &'static str {
    r#"[
      {
        "id_stacji": "12295",
        "stacja": "Białystok",
        "data_pomiaru": "2024-05-01",
        "godzina_pomiaru": "12",
        "temperatura": "8.3",
        "predkosc_wiatru": "3",
        "kierunek_wiatru": "250",
        "wilgotnosc_wzgledna": "71.4",
        "suma_opadu": "0",
        "cisnienie": "1012.4"
      },
      {
        "id_stacji": "12135",
        "stacja": "Hel",
        "data_pomiaru": "2024-05-01",
        "godzina_pomiaru": "12",
        "temperatura": "9.1",
        "predkosc_wiatru": "7",
        "kierunek_wiatru": "270",
        "wilgotnosc_wzgledna": "88.0",
        "suma_opadu": "0.4",
        "cisnienie": null
      },
      {
        "id_stacji": "12375",
        "stacja": "Warszawa",
        "data_pomiaru": "2024-05-01",
        "godzina_pomiaru": "12",
        "temperatura": "5.2",
        "predkosc_wiatru": "",
        "kierunek_wiatru": "180",
        "wilgotnosc_wzgledna": "64.2",
        "suma_opadu": "1.2",
        "cisnienie": "1009.8"
      }
    ]"#
}

/// Two hydro stations. Nienowice has no water temperature measurements.
#[cfg(test)]
pub(crate) fn hydro_json() -> &'static str {
    r#"[
      {
        "id_stacji": "150230020",
        "stacja": "Nienowice",
        "rzeka": "Wisznia",
        "województwo": "podkarpackie",
        "stan_wody": "166",
        "stan_wody_data_pomiaru": "2024-05-01 11:40:00",
        "temperatura_wody": null,
        "temperatura_wody_data_pomiaru": null,
        "zjawisko_lodowe": "0",
        "zjawisko_zarastania": "0"
      },
      {
        "id_stacji": "152210170",
        "stacja": "Warszawa-Bulwary",
        "rzeka": "Wisła",
        "województwo": "mazowieckie",
        "stan_wody": "142",
        "stan_wody_data_pomiaru": "2024-05-01 11:50:00",
        "temperatura_wody": "13.6",
        "temperatura_wody_data_pomiaru": "2024-05-01 06:00:00",
        "zjawisko_lodowe": "0",
        "zjawisko_zarastania": "0"
      }
    ]"#
}

/// A single-station lookup returns one object rather than an array.
#[cfg(test)]
pub(crate) fn single_station_object_json() -> &'static str {
    r#"{ "id_stacji": "12375", "stacja": "Warszawa", "temperatura": "5.2" }"#
}

/// HTML error page served with a 200 status by a misconfigured proxy.
#[cfg(test)]
pub(crate) fn html_error_page() -> &'static str {
    "<html><body><h1>502 Bad Gateway</h1></body></html>"
}
