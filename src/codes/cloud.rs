//! Cloud cover amounts, in oktas.

code_table! {
    /// Cloud amount reported in front of each layer height.
    pub enum CloudCover ("cloud cover") {
        #[default]
        None => ("none", "", ""),
        Skc => ("skc", "SKC", "SKC: 0/8"),
        Few => ("few", "FEW", "FEW: 1-2/8"),
        Sct => ("sct", "SCT", "SCT: 3-4/8"),
        Bkn => ("bkn", "BKN", "BKN: 5-7/8"),
        Ovc => ("ovc", "OVC", "OVC: 8/8"),
    }
}
