pub mod generer_fichiers;
