//! Remote layout of the IBGE FTP server.
//!
//! Hosts, base paths, and the two fixed auxiliary filenames live here so the
//! client can be pointed at a different layout (or a mock transport) in tests.

/// Remote directory layout for the quarterly PNAD Contínua release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerLayout {
    /// FTP host, optionally with a `:port` suffix (defaults to 21).
    pub host: String,
    /// Base directory holding one subdirectory per release year.
    pub microdata_root: String,
    /// Directory holding the auxiliary documentation archives.
    pub documentation_dir: String,
    /// Fixed name of the price-deflators archive.
    pub deflators_archive: String,
    /// Fixed name of the data-dictionary / input-layout archive.
    pub dictionary_archive: String,
}

const TRIMESTRAL_ROOT: &str = "/Trabalho_e_Rendimento/Pesquisa_Nacional_por_Amostra_de_Domicilios_continua/Trimestral/Microdados";

impl Default for ServerLayout {
    fn default() -> Self {
        Self {
            host: "ftp.ibge.gov.br".to_string(),
            microdata_root: TRIMESTRAL_ROOT.to_string(),
            documentation_dir: format!("{TRIMESTRAL_ROOT}/Documentacao"),
            deflators_archive: "Deflatores.zip".to_string(),
            dictionary_archive: "Dicionario_e_input.zip".to_string(),
        }
    }
}

impl ServerLayout {
    /// Remote directory holding the microdata archives for `year`.
    pub fn microdata_dir(&self, year: i32) -> String {
        format!("{}/{year}", self.microdata_root)
    }
}

/// Substring used to select the quarter's archive from the year listing,
/// e.g. `PNADC_032014` for 2014 Q3.
pub fn quarter_pattern(year: i32, quarter: u8) -> String {
    format!("PNADC_0{quarter}{year}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_pattern_zero_pads_quarter() {
        assert_eq!(quarter_pattern(2014, 3), "PNADC_032014");
        assert_eq!(quarter_pattern(2023, 1), "PNADC_012023");
    }

    #[test]
    fn microdata_dir_appends_year() {
        let layout = ServerLayout::default();
        assert!(layout.microdata_dir(2014).ends_with("/Microdados/2014"));
    }

    #[test]
    fn default_layout_points_at_ibge() {
        let layout = ServerLayout::default();
        assert_eq!(layout.host, "ftp.ibge.gov.br");
        assert!(layout.documentation_dir.ends_with("/Documentacao"));
        assert_eq!(layout.deflators_archive, "Deflatores.zip");
        assert_eq!(layout.dictionary_archive, "Dicionario_e_input.zip");
    }
}
